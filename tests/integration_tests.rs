// Integration tests against a mocked upstream API.

use chrono::{TimeZone, Utc};
use mockito::{Server, ServerGuard};
use serde_json::json;

use paddock_api::core::{resolver, results, schedule};
use paddock_api::ergast::{ErgastClient, ErgastError};

fn circuits_body(circuits: &[(&str, &str)]) -> String {
    let entries: Vec<_> = circuits
        .iter()
        .map(|(id, name)| json!({ "circuitId": id, "circuitName": name }))
        .collect();
    json!({ "MRData": { "CircuitTable": { "Circuits": entries } } }).to_string()
}

async fn mock_circuits(server: &mut ServerGuard, season: &str, circuits: &[(&str, &str)]) -> mockito::Mock {
    server
        .mock("GET", format!("/{season}/circuits").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(circuits_body(circuits))
        .create_async()
        .await
}

#[tokio::test]
async fn resolves_circuit_in_requested_season() {
    let mut server = Server::new_async().await;
    let m = mock_circuits(
        &mut server,
        "2021",
        &[
            ("monza", "Autodromo Nazionale di Monza"),
            ("spa", "Circuit de Spa-Francorchamps"),
        ],
    )
    .await;
    let client = ErgastClient::new(server.url());

    let resolved = resolver::resolve(&client, "Spa", "2021").await;
    assert_eq!(resolved, Some("spa".to_string()));
    m.assert_async().await;
}

#[tokio::test]
async fn resolves_alias_even_when_literal_name_absent() {
    let mut server = Server::new_async().await;
    mock_circuits(
        &mut server,
        "2021",
        &[
            ("baku", "Baku City Circuit"),
            ("rodriguez", "Autódromo Hermanos Rodríguez"),
        ],
    )
    .await;
    let client = ErgastClient::new(server.url());

    // "mexico" appears in no 2021 circuit name; the alias table carries it.
    let resolved = resolver::resolve(&client, "mexico", "2021").await;
    assert_eq!(resolved, Some("rodriguez".to_string()));
}

#[tokio::test]
async fn fallback_walks_seasons_in_descending_order_and_stops_at_first_hit() {
    let mut server = Server::new_async().await;
    // The requested season has no usable data.
    let primary = server
        .mock("GET", "/1950/circuits")
        .with_status(500)
        .create_async()
        .await;
    // 2023 answers with no match, 2022 errors (swallowed), 2021 matches.
    let m2023 = mock_circuits(&mut server, "2023", &[("monza", "Autodromo Nazionale di Monza")]).await;
    let m2022 = server
        .mock("GET", "/2022/circuits")
        .with_status(500)
        .create_async()
        .await;
    let m2021 = mock_circuits(&mut server, "2021", &[("vegas", "Las Vegas Strip Street Circuit")]).await;
    // Later seasons must never be probed once 2021 matched.
    let m2020 = server
        .mock("GET", "/2020/circuits")
        .expect(0)
        .create_async()
        .await;
    let m2019 = server
        .mock("GET", "/2019/circuits")
        .expect(0)
        .create_async()
        .await;
    let client = ErgastClient::new(server.url());

    let resolved = resolver::resolve(&client, "las vegas", "1950").await;
    assert_eq!(resolved, Some("vegas".to_string()));

    primary.assert_async().await;
    m2023.assert_async().await;
    m2022.assert_async().await;
    m2021.assert_async().await;
    m2020.assert_async().await;
    m2019.assert_async().await;
}

#[tokio::test]
async fn same_season_miss_falls_back_even_on_healthy_response() {
    let mut server = Server::new_async().await;
    mock_circuits(&mut server, "2024", &[("monza", "Autodromo Nazionale di Monza")]).await;
    let m2023 = mock_circuits(&mut server, "2023", &[("miami", "Miami International Autodrome")]).await;
    let client = ErgastClient::new(server.url());

    let resolved = resolver::resolve(&client, "miami", "2024").await;
    assert_eq!(resolved, Some("miami".to_string()));
    m2023.assert_async().await;
}

#[tokio::test]
async fn unknown_name_resolves_to_none_after_exhausting_fallback() {
    let mut server = Server::new_async().await;
    mock_circuits(&mut server, "2021", &[("monza", "Autodromo Nazionale di Monza")]).await;
    for season in resolver::FALLBACK_SEASONS {
        mock_circuits(&mut server, season, &[("monza", "Autodromo Nazionale di Monza")]).await;
    }
    let client = ErgastClient::new(server.url());

    assert_eq!(resolver::resolve(&client, "atlantis", "2021").await, None);
}

#[tokio::test]
async fn results_normalize_and_skip_malformed_rows() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/2021/circuits/spa/results")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "MRData": { "RaceTable": { "Races": [{
                "raceName": "Belgian Grand Prix",
                "Results": [
                    {
                        "position": "1",
                        "Driver": { "givenName": "Max", "familyName": "Verstappen", "nationality": "Dutch" },
                        "Constructor": { "name": "Red Bull" },
                        "Time": { "time": "0:03:27.071" }
                    },
                    { "position": "2" },
                    {
                        "position": "3",
                        "Driver": { "givenName": "Lewis", "familyName": "Hamilton", "nationality": "British" },
                        "Constructor": { "name": "Mercedes" },
                        "status": "Accident"
                    }
                ]
            }] } } })
            .to_string(),
        )
        .create_async()
        .await;
    let client = ErgastClient::new(server.url());

    let rows = results::fetch_results(&client, "spa", "2021").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].family_name, "Verstappen");
    assert_eq!(rows[0].time_or_status, "0:03:27.071");
    assert_eq!(rows[1].time_or_status, "Accident");
}

#[tokio::test]
async fn missing_race_structure_is_empty_not_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/2020/circuits/monza/results")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "MRData": {} }).to_string())
        .create_async()
        .await;
    let client = ErgastClient::new(server.url());

    let rows = results::fetch_results(&client, "monza", "2020").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn upstream_failure_is_a_tagged_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/2020/circuits/monza/results")
        .with_status(503)
        .create_async()
        .await;
    let client = ErgastClient::new(server.url());

    let err = results::fetch_results(&client, "monza", "2020")
        .await
        .unwrap_err();
    assert!(matches!(err, ErgastError::Status(_)));
}

#[tokio::test]
async fn malformed_standing_entry_does_not_discard_page() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/2024/driverStandings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "MRData": { "StandingsTable": { "StandingsLists": [{
                "DriverStandings": [
                    {
                        "position": "1",
                        "points": "437",
                        "Driver": { "givenName": "Max", "familyName": "Verstappen", "nationality": "Dutch" },
                        "Constructors": [{ "name": "Red Bull" }]
                    },
                    {
                        "position": "2",
                        "Driver": { "givenName": "Lando", "familyName": "Norris", "nationality": "British" },
                        "Constructors": [{ "name": "McLaren" }]
                    },
                    {
                        "position": "3",
                        "points": "291",
                        "Driver": { "givenName": "Charles", "familyName": "Leclerc", "nationality": "Monegasque" },
                        "Constructors": [{ "name": "Ferrari" }]
                    }
                ]
            }] } } })
            .to_string(),
        )
        .create_async()
        .await;
    let client = ErgastClient::new(server.url());

    let standings = client.driver_standings("2024").await.unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].family_name, "Verstappen");
    assert_eq!(standings[1].family_name, "Leclerc");
    assert_eq!(standings[1].flag, "🇲🇨");
}

#[tokio::test]
async fn race_calendar_feeds_the_schedule_selector() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/2025/races")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "MRData": { "RaceTable": { "Races": [
                {
                    "raceName": "GP A",
                    "date": "2025-03-01",
                    "time": "14:00:00Z",
                    "Circuit": { "circuitId": "a", "circuitName": "Circuit A" }
                },
                {
                    "raceName": "GP B",
                    "date": "2025-03-15",
                    "time": "12:00:00Z",
                    "Circuit": { "circuitId": "b", "circuitName": "Circuit B" }
                }
            ] } } })
            .to_string(),
        )
        .create_async()
        .await;
    let client = ErgastClient::new(server.url());

    let races = client.races("2025").await.unwrap();
    let now = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();
    let (next, start) = schedule::next_race(&races, now).unwrap();
    assert_eq!(next.race_name, "GP B");
    assert_eq!(schedule::display_time(start), "15/03/2025 13:00");
}
