//! The two operations behind the `list-models` and `prompt` binaries.
//!
//! They deliberately use different failure policies. Listing catches any
//! failure of the listing call and reports it as an `Error: <message>` line,
//! leaving the process to exit cleanly. Prompting propagates every failure to
//! the caller so the process exits non-zero.

use std::io::Write;

use gemini_probe_types::config::GenerationConfig;
use gemini_probe_types::content::Content;
use gemini_probe_types::models::{GenerateContentConfig, ListModelsConfig, Model};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::Models;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_PROMPT: &str =
    "Halo Gemini, jika kamu bisa membaca pesan ini, artinya API Key saya sudah aktif!";
pub const LISTING_BANNER: &str = "Listing models...";

/// 只保留支持 `generateContent` 的模型，保持服务端顺序。
#[must_use]
pub fn generation_models(models: Vec<Model>) -> Vec<Model> {
    models
        .into_iter()
        .filter(Model::supports_generate_content)
        .collect()
}

/// 格式化为 `Name: <name>, Display Name: <display name>`，缺失字段输出为空。
#[must_use]
pub fn format_model_line(model: &Model) -> String {
    format!(
        "Name: {}, Display Name: {}",
        model.name.as_deref().unwrap_or_default(),
        model.display_name.as_deref().unwrap_or_default()
    )
}

/// 列出支持内容生成的模型。
///
/// 只捕获列表请求本身的失败：写出 `Error: <message>` 并返回 `Ok(())`。
/// 写入 `out` 的失败仍会向上传递。
///
/// # Errors
/// 仅当写入 `out` 失败时返回错误。
pub async fn list_models<W: Write>(
    models: &Models,
    config: ListModelsConfig,
    out: &mut W,
) -> std::io::Result<()> {
    match models.all_with_config(config).await {
        Ok(all) => {
            let total = all.len();
            let usable = generation_models(all);
            info!(total, usable = usable.len(), "listed models");
            for model in &usable {
                writeln!(out, "{}", format_model_line(model))?;
            }
        }
        Err(err) => {
            debug!(error = ?err, "listing models failed");
            writeln!(out, "Error: {err}")?;
        }
    }
    Ok(())
}

/// 单次提示词调用参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub model: String,
    pub prompt: String,
    /// 输出 MIME 类型，例如 `application/json`。
    pub response_mime_type: Option<String>,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            response_mime_type: None,
        }
    }
}

impl PromptRequest {
    fn generate_config(&self) -> GenerateContentConfig {
        let generation_config = self
            .response_mime_type
            .as_ref()
            .map(|mime| GenerationConfig {
                response_mime_type: Some(mime.clone()),
                ..Default::default()
            });
        GenerateContentConfig { generation_config }
    }
}

/// 发送提示词并输出响应文本。
///
/// 不捕获任何错误；响应无文本时返回 [`Error::EmptyResponse`]，不写出内容。
///
/// # Errors
/// 请求失败、响应无文本或写入失败时返回错误。
pub async fn run_prompt<W: Write>(
    models: &Models,
    request: &PromptRequest,
    out: &mut W,
) -> Result<()> {
    let response = models
        .generate_content_with_config(
            request.model.as_str(),
            vec![Content::text(request.prompt.as_str())],
            request.generate_config(),
        )
        .await?;
    if let Some(reason) = response.block_reason() {
        debug!(?reason, "prompt was blocked");
    }
    let text = response.text().ok_or_else(|| Error::EmptyResponse {
        model: request.model.clone(),
    })?;
    writeln!(out, "{text}")?;
    Ok(())
}
