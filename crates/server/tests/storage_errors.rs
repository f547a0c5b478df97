use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use models::servicio::{Model, ServicioInput};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::{errors::ServiceError, servicio::ServicioRepository};
use tokio::net::TcpListener;

use server::servicios::AppState;
use server::startup::build_app;

/// Repository whose storage is always down.
struct BrokenStorage;

fn down() -> ServiceError {
    ServiceError::Db("Error 1146: Table 'taller.taller' doesn't exist".into())
}

#[async_trait]
impl ServicioRepository for BrokenStorage {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> { Err(down()) }
    async fn get(&self, _id: i32) -> Result<Vec<Model>, ServiceError> { Err(down()) }
    async fn create(&self, _input: ServicioInput) -> Result<Model, ServiceError> { Err(down()) }
    async fn replace(&self, _id: i32, _input: ServicioInput) -> Result<(), ServiceError> { Err(down()) }
    async fn delete(&self, _id: i32) -> Result<(), ServiceError> { Err(down()) }
}

async fn start_broken() -> anyhow::Result<String> {
    let app = build_app(AppState { servicios: Arc::new(BrokenStorage) });
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

async fn expect_500(res: reqwest::Response, message: &str) -> anyhow::Result<()> {
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], message);
    assert_eq!(body["error"], "Error 1146: Table 'taller.taller' doesn't exist");
    Ok(())
}

#[tokio::test]
async fn storage_failure_surfaces_raw_text_as_500() -> anyhow::Result<()> {
    let base = start_broken().await?;
    let c = reqwest::Client::new();

    expect_500(c.get(format!("{base}/servicio")).send().await?, "Error al consultar los registros").await?;
    expect_500(c.get(format!("{base}/servicio/1")).send().await?, "Error al consultar los registros").await?;
    expect_500(
        c.post(format!("{base}/servicio")).json(&json!({"nombre": "Ana"})).send().await?,
        "Error al crear el registro",
    )
    .await?;
    expect_500(
        c.put(format!("{base}/servicio/1")).json(&json!({"nombre": "Ana"})).send().await?,
        "Error al actualizar el registro",
    )
    .await?;
    expect_500(c.delete(format!("{base}/servicio/1")).send().await?, "Error al eliminar el registro").await?;
    Ok(())
}

#[tokio::test]
async fn parse_errors_win_over_storage_errors() -> anyhow::Result<()> {
    let base = start_broken().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{base}/servicio"))
        .header("content-type", "application/json")
        .body("42")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.put(format!("{base}/servicio/x")).json(&json!({})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
