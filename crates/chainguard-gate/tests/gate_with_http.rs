use chainguard_client::{ClientConfig, InferenceClient};
use chainguard_core::Error;
use chainguard_gate::{EthersWallet, GateState, TransactionGate, WalletSession};
use chainguard_risk::ActionRecommendation;
use ethers::providers::{MockProvider, Provider};
use ethers::types::{Address, U256};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Gate = TransactionGate<EthersWallet<Provider<MockProvider>>, InferenceClient>;

async fn connected_gate(server: &MockServer) -> (Gate, MockProvider) {
    let (provider, mock) = Provider::mocked();
    mock.push::<Vec<Address>, _>(vec![Address::repeat_byte(0x11)]).unwrap();

    let session = Arc::new(WalletSession::new(EthersWallet::new(Arc::new(provider))));
    session.connect().await.unwrap();

    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let client = Arc::new(InferenceClient::new(config).unwrap());
    (TransactionGate::new(session, client), mock)
}

/// Respostas do MockProvider saem da fila em ordem inversa:
/// nonce, preço do gas e estimativa são consultados nessa sequência.
fn push_chain_data(mock: &MockProvider, nonce: u64, gas_price: u64, gas: u64) {
    mock.push(U256::from(gas)).unwrap();
    mock.push(U256::from(gas_price)).unwrap();
    mock.push(U256::from(nonce)).unwrap();
}

#[tokio::test]
async fn analyze_sends_chain_data_to_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_fraud": true,
            "risk_score": 97,
            "alert": "CRITICAL: High Risk"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut gate, mock) = connected_gate(&server).await;
    push_chain_data(&mock, 9, 2_000_000_000, 25_000);

    gate.open().unwrap();
    gate.set_recipient("0x2222222222222222222222222222222222222222").unwrap();
    gate.set_amount("0.5").unwrap();

    let assessment = gate.analyze().await.unwrap();
    assert_eq!(assessment.risk_score().value(), 96);
    assert_eq!(assessment.action(), ActionRecommendation::FlagForInvestigation);
    assert!(matches!(gate.state(), GateState::AwaitingConfirmation(_)));
    assert!(gate.status().contains("Confirme para enviar"));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["from_address"], "0x1111111111111111111111111111111111111111");
    assert_eq!(body["to_address"], "0x2222222222222222222222222222222222222222");
    assert_eq!(body["value"], "500000000000000000");
    assert_eq!(body["gas"], 25_000);
    assert_eq!(body["gas_price"], "2000000000");
    assert_eq!(body["nonce"], 9);
    assert_eq!(body["input_data"], "0x");
}

#[tokio::test]
async fn backend_error_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "modelo indisponível"
        })))
        .mount(&server)
        .await;

    let (mut gate, mock) = connected_gate(&server).await;
    push_chain_data(&mock, 0, 1, 21_000);

    gate.open().unwrap();
    gate.set_recipient("0x2222222222222222222222222222222222222222").unwrap();
    gate.set_amount("1").unwrap();

    let err = gate.analyze().await.unwrap_err();
    assert!(matches!(err, Error::NetworkError(_)));
    assert!(gate.status().contains("modelo indisponível"));
    match gate.form() {
        Some(form) => assert_eq!(form.amount, "1"),
        None => panic!("formulário perdido"),
    }
}
