//! Models API surface.

use std::collections::HashSet;
use std::sync::Arc;

use gemini_probe_types::content::Content;
use gemini_probe_types::models::{
    GenerateContentConfig, GenerateContentRequest, ListModelsConfig, ListModelsResponse, Model,
};
use gemini_probe_types::response::GenerateContentResponse;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::ClientInner;
use crate::error::{Error, Result};

mod http;


use self::http::{build_model_method_url, build_models_list_url};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 生成内容（默认配置）。
    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse> {
        self.generate_content_with_config(model, contents, GenerateContentConfig::default())
            .await
    }

    /// 生成内容（自定义配置）。
    pub async fn generate_content_with_config(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
        config: GenerateContentConfig,
    ) -> Result<GenerateContentResponse> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "Model name must not be empty".into(),
            });
        }

        let request = GenerateContentRequest {
            contents,
            generation_config: config.generation_config,
        };

        let url = build_model_method_url(&self.inner, &model, "generateContent");
        let request = self.inner.http.post(url).json(&request);
        let response = self.inner.send(request).await?;
        read_json(response).await
    }

    /// 列出模型（基础列表）。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（带配置）。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        read_json(response).await
    }

    /// 列出所有模型（自动翻页）。
    pub async fn all(&self) -> Result<Vec<Model>> {
        self.all_with_config(ListModelsConfig::default()).await
    }

    /// 列出所有模型（带配置，自动翻页）。
    ///
    /// 服务端返回已使用过的 `nextPageToken` 时返回 [`Error::RepeatedPageToken`]。
    pub async fn all_with_config(&self, mut config: ListModelsConfig) -> Result<Vec<Model>> {
        let mut models = Vec::new();
        let mut seen_tokens: HashSet<String> = config.page_token.iter().cloned().collect();
        loop {
            let response = self.list_with_config(config.clone()).await?;
            if let Some(items) = response.models {
                debug!(count = items.len(), "received model page");
                models.extend(items);
            }
            match response.next_page_token {
                Some(token) if !token.is_empty() => {
                    if !seen_tokens.insert(token.clone()) {
                        warn!(%token, "service repeated a page token");
                        return Err(Error::RepeatedPageToken { token });
                    }
                    config.page_token = Some(token);
                }
                _ => break,
            }
        }
        Ok(models)
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Gemini API returned an error");
        return Err(Error::from_response_body(status.as_u16(), &body));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
