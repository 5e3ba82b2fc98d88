use bam_lib::bam_api::SUBSCRIPTION_KEY_HEADER;
use bam_lib::{ApiKeys, BamClient, BamError, ErrorKind};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_keys() -> ApiKeys {
    ApiKeys {
        marche_adjud_des_bt: "auctions-key".to_string(),
        marche_des_changes: "fx-key".to_string(),
        marche_obligataire: "bonds-key".to_string(),
    }
}

fn eur_payload() -> serde_json::Value {
    serde_json::json!([{
        "achatClientele": 2.5085,
        "date": "2023-05-11T08:30:00",
        "libDevise": "EUR",
        "uniteDevise": 1,
        "venteClientele": 2.9153
    }])
}

#[tokio::test]
async fn banknote_rates_sends_filters_and_returns_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cours/Version1/api/CoursBBE"))
        .and(query_param("libDevise", "EUR"))
        .and(query_param("date", "2023-05-11"))
        .and(header(SUBSCRIPTION_KEY_HEADER, "fx-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(eur_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let records = client.banknote_rates("EUR", "2023-05-11").await.unwrap();

    assert_eq!(serde_json::to_value(&records).unwrap(), eur_payload());
}

#[tokio::test]
async fn transfer_rates_accept_date_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cours/Version1/api/CoursVirement"))
        .and(query_param("libDevise", ""))
        .and(query_param("date", "2023-05-13T14:30:00.000000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "date": "2023-05-13T12:30:00",
            "libDevise": "EUR",
            "moyen": 10.9884,
            "uniteDevise": 1
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let records = client
        .transfer_rates("", "2023-05-13T14:30:00.000000Z")
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn policy_results_resolve_instrument_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adju/Version1/api/GenTELADJ"))
        .and(query_param("dateAdjudicationDu", "2023-01-01"))
        .and(query_param("dateAdjudicationAu", ""))
        .and(query_param("instrument", "AVANCES7J"))
        .and(header(SUBSCRIPTION_KEY_HEADER, "auctions-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let records = client
        .monetary_policy_results("2023-01-01", "", "avances_7j")
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn treasury_curve_uses_bond_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mo/Version1/api/CourbeBDT"))
        .and(query_param("dateCourbe", "2019-01-02"))
        .and(header(SUBSCRIPTION_KEY_HEADER, "bonds-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "dateEcheance": "2046-02-19",
            "dateValeur": "2018-12-28",
            "dateCourbe": "2019-01-02",
            "tmp": 4.326,
            "volume": 195.25
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let records = client.treasury_curve("2019-01-02").await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn no_content_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adju/Version1/api/TELADJEchange"))
        .and(query_param("dateReglement", "2022-04-04"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let records = client.treasury_bill_exchanges("2022-04-04").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn buybacks_hit_buyback_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adju/Version1/api/TELADJRachat"))
        .and(query_param("dateReglement", ""))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    assert!(client.treasury_bill_buybacks("").await.unwrap().is_empty());
}

#[tokio::test]
async fn issuances_require_a_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let err = client.treasury_bill_issuances("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn issuances_with_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adju/Version1/api/TELADJAdjuNormal"))
        .and(query_param("dateReglement", "2022-04-04"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"dateReglement": "2022-04-04", "montantAdjuge": 1250.5, "nbrSoumission": 12}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let records = client.treasury_bill_issuances("2022-04-04").await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn invalid_inputs_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();

    let cases: Vec<BamError> = vec![
        client.banknote_rates("eur", "").await.unwrap_err(),
        client.banknote_rates("", "11-05-2023").await.unwrap_err(),
        client.transfer_rates("MADD", "").await.unwrap_err(),
        client.treasury_curve("2019-13-01").await.unwrap_err(),
        client
            .monetary_policy_results("2023-01-01", "", "unknown")
            .await
            .unwrap_err(),
        client
            .monetary_policy_results("2023/01/01", "", "")
            .await
            .unwrap_err(),
        client.treasury_bill_exchanges("tomorrow").await.unwrap_err(),
    ];
    for err in cases {
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", err);
    }
}

#[tokio::test]
async fn rejected_key_is_credential_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), ApiKeys::default()).unwrap();
    let err = client.banknote_rates("", "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Credential);
}

#[tokio::test]
async fn throttled_request_is_rate_limit_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "statusCode": 429,
            "message": "Rate limit is exceeded. Try again in 3 seconds."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let err = client.treasury_curve("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert!(err.to_string().contains("Try again in 3 seconds."));
}

#[tokio::test]
async fn set_keys_applies_to_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header(SUBSCRIPTION_KEY_HEADER, "rotated"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = BamClient::with_base_url(&server.uri(), test_keys()).unwrap();
    let mut keys = client.keys().clone();
    keys.marche_des_changes = "rotated".to_string();
    client.set_keys(keys);

    assert!(client.banknote_rates("USD", "").await.unwrap().is_empty());
}
