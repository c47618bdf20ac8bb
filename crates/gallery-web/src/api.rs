//! Backend calls over tRPC/HTTP.

use crate::trpc;
use anyhow::anyhow;
use gallery_core::{ArtifactPlacement, ArtifactRecord, NewStroke, StrokeRecord};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub async fn portfolio_artifacts(&self, portfolio_id: i64) -> anyhow::Result<Vec<ArtifactRecord>> {
        self.query("getPortfolioArtifacts", &json!({ "portfolio_id": portfolio_id }))
            .await
    }

    pub async fn session_strokes(&self, session_id: i64) -> anyhow::Result<Vec<StrokeRecord>> {
        self.query("getSessionDrawingStrokes", &json!({ "session_id": session_id }))
            .await
    }

    pub async fn create_stroke(&self, stroke: &NewStroke) -> anyhow::Result<StrokeRecord> {
        self.mutation("createDrawingStroke", stroke).await
    }

    pub async fn update_artifact_position(&self, placement: &ArtifactPlacement) -> anyhow::Result<()> {
        let _: IgnoredAny = self.mutation("updateArtifactPosition", placement).await?;
        Ok(())
    }

    async fn query<I: Serialize, O: DeserializeOwned>(&self, procedure: &str, input: &I) -> anyhow::Result<O> {
        let input = js_sys::encode_uri_component(&trpc::envelope(input)?);
        let url = format!(
            "{}?input={}",
            trpc::procedure_url(&self.base, procedure),
            String::from(input)
        );
        let opts = web::RequestInit::new();
        opts.set_method("GET");
        let request = web::Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| anyhow!("{procedure}: bad request: {:?}", e))?;
        send(procedure, request).await
    }

    async fn mutation<I: Serialize, O: DeserializeOwned>(&self, procedure: &str, input: &I) -> anyhow::Result<O> {
        let url = trpc::procedure_url(&self.base, procedure);
        let opts = web::RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&trpc::envelope(input)?));
        let request = web::Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| anyhow!("{procedure}: bad request: {:?}", e))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| anyhow!("{:?}", e))?;
        send(procedure, request).await
    }
}

async fn send<O: DeserializeOwned>(procedure: &str, request: web::Request) -> anyhow::Result<O> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("{procedure}: fetch failed: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    let status = response.status();
    let body = JsFuture::from(response.text().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("{procedure}: reading body failed: {:?}", e))?
        .as_string()
        .unwrap_or_default();
    match trpc::decode(procedure, &body) {
        Ok(value) if response.ok() => Ok(value),
        Ok(_) => Err(anyhow!("{procedure}: HTTP {status}")),
        Err(e) => Err(e.context(format!("HTTP {status}"))),
    }
}
