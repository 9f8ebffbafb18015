use regex::Regex;
use tracing::{info, warn};

use crate::ergast::ErgastClient;
use crate::models::Circuit;

/// Seasons probed, most recent first, when the requested season yields no
/// usable circuit data or no match. Historic seasons rename, renumber, or
/// drop circuits, so a miss there is not a hard failure.
pub const FALLBACK_SEASONS: [&str; 5] = ["2023", "2022", "2021", "2020", "2019"];

/// Maps common names for a Grand Prix (city, country, nationality,
/// colloquial name) to the canonical circuit id used by the upstream API.
pub fn circuit_alias(token: &str) -> Option<&'static str> {
    match token {
        "interlagos" | "brasil" | "brazilian" => Some("interlagos"),
        "mexico" | "mexican" => Some("rodriguez"),
        "albert park" | "australia" | "melbourne" => Some("albert_park"),
        "americas" | "usa" | "united states" | "cota" | "austin" => Some("americas"),
        "abu dhabi" | "yas marina" => Some("yas_marina"),
        "arabia" | "saudi" | "jeddah" => Some("jeddah"),
        "las vegas" => Some("vegas"),
        "monaco" => Some("monaco"),
        "silverstone" | "britain" | "british" => Some("silverstone"),
        "monza" | "italy" | "italian" => Some("monza"),
        "spa" | "belgium" | "belgian" => Some("spa"),
        "hungaroring" | "hungary" | "hungarian" => Some("hungaroring"),
        "zandvoort" | "netherlands" | "dutch" => Some("zandvoort"),
        "suzuka" | "japan" | "japanese" => Some("suzuka"),
        "barcelona" | "catalunya" | "spain" | "spanish" => Some("catalunya"),
        "baku" | "azerbaijan" => Some("baku"),
        "shanghai" | "china" | "chinese" => Some("shanghai"),
        "bahrain" | "sakhir" => Some("bahrain"),
        "imola" | "emilia" | "romagna" => Some("imola"),
        "portugal" | "portimao" => Some("portimao"),
        "singapore" | "marina bay" => Some("marina_bay"),
        "montreal" | "canada" | "canadian" | "villeneuve" => Some("villeneuve"),
        "istanbul" | "turkey" | "turkish" => Some("istanbul"),
        "sochi" | "russia" | "russian" => Some("sochi"),
        "austria" | "red bull ring" | "styrian" => Some("red_bull_ring"),
        "sepang" | "malaysia" | "malaysian" => Some("sepang"),
        "nurburgring" | "germany" | "german" => Some("nurburgring"),
        "hockenheim" => Some("hockenheimring"),
        "france" | "french" | "paul ricard" => Some("paul_ricard"),
        "hanoi" | "vietnam" | "vietnamese" => Some("hanoi"),
        "losail" | "qatar" | "qatari" => Some("losail"),
        "miami" => Some("miami"),
        _ => None,
    }
}

/// Lowercases and trims the query, then substitutes the alias table's
/// canonical token when one exists. Substitution happens exactly once,
/// never recursively.
pub fn normalize_query(raw_name: &str) -> String {
    let token = raw_name.trim().to_lowercase();
    match circuit_alias(&token) {
        Some(canonical) => canonical.to_string(),
        None => token,
    }
}

fn substring_match(token: &str, name: &str, id: &str) -> bool {
    name.contains(token) || token.contains(name) || id.contains(token)
}

/// Same-season matching: substrings in either direction on the display
/// name, substring on the id, or one string matching the other as a regex
/// pattern. Tokens that are not valid patterns just skip the regex clause.
fn flexible_match(token: &str, circuit: &Circuit) -> bool {
    let name = circuit.circuit_name.to_lowercase();
    let id = circuit.circuit_id.to_lowercase();
    if substring_match(token, &name, &id) {
        return true;
    }
    Regex::new(token).is_ok_and(|re| re.is_match(&name) || re.is_match(&id))
        || Regex::new(&name).is_ok_and(|re| re.is_match(token))
}

/// First circuit matching the normalized token, in upstream list order.
/// Deliberately no best-match ranking: two circuits both containing the
/// token resolve to whichever the upstream lists first.
pub fn match_in_season(token: &str, circuits: &[Circuit]) -> Option<String> {
    circuits
        .iter()
        .find(|circuit| flexible_match(token, circuit))
        .map(|circuit| circuit.circuit_id.clone())
}

/// Resolves a free-text Grand Prix or circuit name against a season's
/// circuit list. A failed or empty same-season lookup degrades to the
/// fallback-season search rather than erroring; `None` is the first-class
/// not-found outcome.
pub async fn resolve(client: &ErgastClient, raw_name: &str, season: &str) -> Option<String> {
    let token = normalize_query(raw_name);

    match client.circuits(season).await {
        Ok(circuits) if !circuits.is_empty() => {
            if let Some(circuit_id) = match_in_season(&token, &circuits) {
                return Some(circuit_id);
            }
            warn!(season, name = %raw_name, "no circuit matched in requested season");
        }
        Ok(_) => warn!(season, "no circuits listed for season"),
        Err(err) => warn!(season, error = %err, "circuit list fetch failed"),
    }

    fallback_search(client, &token).await
}

/// Probes recent seasons in descending order with a simplified
/// substring-only match, stopping at the first season with a hit.
/// Per-season fetch failures are logged and swallowed.
async fn fallback_search(client: &ErgastClient, token: &str) -> Option<String> {
    for season in FALLBACK_SEASONS {
        match client.circuits(season).await {
            Ok(circuits) => {
                let hit = circuits.iter().find(|circuit| {
                    substring_match(
                        token,
                        &circuit.circuit_name.to_lowercase(),
                        &circuit.circuit_id.to_lowercase(),
                    )
                });
                if let Some(circuit) = hit {
                    info!(season, circuit = %circuit.circuit_id, "circuit found in fallback season");
                    return Some(circuit.circuit_id.clone());
                }
            }
            Err(err) => {
                warn!(season, error = %err, "fallback season fetch failed");
                continue;
            }
        }
    }
    None
}
