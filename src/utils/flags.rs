/// Flag emoji for a driver or constructor nationality as the upstream API
/// spells it. Unknown nationalities render without a flag.
pub fn nationality_flag(nationality: &str) -> &'static str {
    match nationality {
        "British" => "🇬🇧",
        "German" => "🇩🇪",
        "Spanish" => "🇪🇸",
        "French" => "🇫🇷",
        "Italian" => "🇮🇹",
        "Dutch" => "🇳🇱",
        "Finnish" => "🇫🇮",
        "Australian" => "🇦🇺",
        "Canadian" => "🇨🇦",
        "Brazilian" => "🇧🇷",
        "Mexican" => "🇲🇽",
        "American" => "🇺🇸",
        "Russian" => "🇷🇺",
        "Japanese" => "🇯🇵",
        "Austrian" => "🇦🇹",
        "Argentinian" | "Argentine" => "🇦🇷",
        "Swiss" => "🇨🇭",
        "Belgian" => "🇧🇪",
        "Danish" => "🇩🇰",
        "Swedish" => "🇸🇪",
        "South African" => "🇿🇦",
        "Portuguese" => "🇵🇹",
        "New Zealander" => "🇳🇿",
        "Indian" => "🇮🇳",
        "Malaysian" => "🇲🇾",
        "Colombian" => "🇨🇴",
        "Venezuelan" => "🇻🇪",
        "Polish" => "🇵🇱",
        "Czech" => "🇨🇿",
        "Hungarian" => "🇭🇺",
        "Indonesian" => "🇮🇩",
        "Thai" => "🇹🇭",
        "Chinese" => "🇨🇳",
        "Korean" => "🇰🇷",
        "Bahraini" => "🇧🇭",
        "Qatari" => "🇶🇦",
        "Emirati" => "🇦🇪",
        "Saudi" => "🇸🇦",
        "Kuwaiti" => "🇰🇼",
        "Monegasque" => "🇲🇨",
        _ => "",
    }
}
