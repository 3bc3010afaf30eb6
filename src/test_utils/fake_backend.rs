//! An in-process stand-in for the finance REST API.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, put},
};
use serde::Deserialize;
use serde_json::Value;
use tokio::net::TcpListener;

use crate::{
    backend::BackendClient,
    select_option::{OptionKind, SelectOption},
    transaction::{Transaction, TransactionId},
};

/// The data served by a [FakeBackend] and the writes it has received.
#[derive(Debug, Default)]
pub(crate) struct FakeBackendData {
    pub transactions: Vec<Transaction>,
    pub years: Vec<i32>,
    pub categories: Vec<SelectOption>,
    pub payment_methods: Vec<SelectOption>,
    pub currencies: Vec<SelectOption>,

    pub created_options: Vec<(OptionKind, Value)>,
    pub created_transactions: Vec<Value>,
    pub updated_transactions: Vec<(TransactionId, Value)>,
    pub deleted_transactions: Vec<TransactionId>,

    /// Answer every request with 500 Internal Server Error.
    pub fail_requests: bool,
    /// Answer requests for these paths with 500 Internal Server Error.
    pub failing_paths: Vec<String>,
}

impl FakeBackendData {
    fn options_mut(&mut self, kind: OptionKind) -> &mut Vec<SelectOption> {
        match kind {
            OptionKind::Category => &mut self.categories,
            OptionKind::PaymentMethod => &mut self.payment_methods,
            OptionKind::Currency => &mut self.currencies,
        }
    }
}

type SharedData = Arc<Mutex<FakeBackendData>>;

/// A finance API listening on a random local port.
pub(crate) struct FakeBackend {
    address: SocketAddr,
    data: SharedData,
}

impl FakeBackend {
    pub async fn start(data: FakeBackendData) -> Self {
        let data = Arc::new(Mutex::new(data));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind fake backend");
        let address = listener.local_addr().expect("Could not get local address");

        let router = Router::new()
            .route(
                "/transactions",
                get(list_transactions).post(create_transaction),
            )
            .route("/transactions/dashboard", get(list_dashboard_transactions))
            .route("/transactions/getYears", get(list_years))
            .route(
                "/transactions/{id}",
                put(update_transaction).delete(delete_transaction),
            )
            .route("/categories", option_routes(OptionKind::Category))
            .route("/paymentMethods", option_routes(OptionKind::PaymentMethod))
            .route("/currencies", option_routes(OptionKind::Currency))
            .layer(middleware::from_fn_with_state(
                data.clone(),
                fail_requests_middleware,
            ))
            .with_state(data.clone());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake backend stopped unexpectedly");
        });

        Self { address, data }
    }

    /// The base URL to configure the web client with.
    pub fn url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::new(&self.url(), Duration::from_secs(5))
            .expect("Could not create client for fake backend")
    }

    /// A client for an API that refuses every connection.
    pub fn unreachable_client() -> BackendClient {
        BackendClient::new("http://127.0.0.1:1", Duration::from_secs(1))
            .expect("Could not create client for unreachable backend")
    }

    pub fn data(&self) -> MutexGuard<'_, FakeBackendData> {
        self.data.lock().expect("Fake backend data lock poisoned")
    }
}

async fn fail_requests_middleware(
    State(data): State<SharedData>,
    request: Request,
    next: Next,
) -> Response {
    let should_fail = {
        let data = data.lock().unwrap();
        let path = request.uri().path();
        data.fail_requests || data.failing_paths.iter().any(|failing| failing == path)
    };

    if should_fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "simulated failure").into_response();
    }

    next.run(request).await
}

async fn list_transactions(State(data): State<SharedData>) -> Json<Vec<Transaction>> {
    Json(data.lock().unwrap().transactions.clone())
}

#[derive(Deserialize)]
struct YearQuery {
    year: i32,
}

async fn list_dashboard_transactions(
    State(data): State<SharedData>,
    Query(query): Query<YearQuery>,
) -> Json<Vec<Transaction>> {
    let transactions = data
        .lock()
        .unwrap()
        .transactions
        .iter()
        .filter(|transaction| transaction.transaction_date.year() == query.year)
        .cloned()
        .collect();

    Json(transactions)
}

async fn list_years(State(data): State<SharedData>) -> Json<Vec<i32>> {
    Json(data.lock().unwrap().years.clone())
}

async fn create_transaction(
    State(data): State<SharedData>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    data.lock().unwrap().created_transactions.push(body.clone());

    (StatusCode::CREATED, Json(body))
}

async fn update_transaction(
    State(data): State<SharedData>,
    Path(id): Path<TransactionId>,
    Json(body): Json<Value>,
) -> StatusCode {
    let mut data = data.lock().unwrap();

    if !data.transactions.iter().any(|transaction| transaction.id == id) {
        return StatusCode::NOT_FOUND;
    }

    data.updated_transactions.push((id, body));
    StatusCode::OK
}

async fn delete_transaction(
    State(data): State<SharedData>,
    Path(id): Path<TransactionId>,
) -> StatusCode {
    let mut data = data.lock().unwrap();

    let Some(index) = data
        .transactions
        .iter()
        .position(|transaction| transaction.id == id)
    else {
        return StatusCode::NOT_FOUND;
    };

    data.transactions.remove(index);
    data.deleted_transactions.push(id);
    StatusCode::NO_CONTENT
}

fn option_routes(kind: OptionKind) -> MethodRouter<SharedData> {
    get(move |state: State<SharedData>| list_options(state, kind))
        .post(move |state: State<SharedData>, body: Json<Value>| create_option(state, kind, body))
}

async fn list_options(State(data): State<SharedData>, kind: OptionKind) -> Json<Vec<SelectOption>> {
    Json(data.lock().unwrap().options_mut(kind).clone())
}

async fn create_option(
    State(data): State<SharedData>,
    kind: OptionKind,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut data = data.lock().unwrap();
    let name = body["name"].as_str().unwrap_or_default().to_owned();

    let options = data.options_mut(kind);
    let id = options.iter().map(|option| option.id).max().unwrap_or(0) + 1;
    let option = SelectOption { id, name };
    options.push(option.clone());

    data.created_options.push((kind, body));

    (StatusCode::CREATED, Json(option))
}
