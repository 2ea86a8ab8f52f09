//! Command-line plumbing shared by the `list-models` and `prompt` binaries.

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

use crate::client::{Client, ClientBuilder};
use crate::error::Result;
use crate::probe::{PromptRequest, DEFAULT_MODEL, DEFAULT_PROMPT};
use gemini_probe_types::models::ListModelsConfig;

/// 两个二进制共用的连接参数。
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Gemini API Key，缺省时依次读取 GEMINI_API_KEY、GOOGLE_API_KEY。
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// 请求超时（秒）。
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    /// 先读环境变量，再用命令行参数覆盖；空白的 `--api-key` 会被忽略。
    ///
    /// # Errors
    /// 当环境配置无效或缺少 API Key 时返回错误。
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = ClientBuilder::from_env()?;
        if let Some(api_key) = self.api_key.as_deref().filter(|key| !key.trim().is_empty()) {
            builder = builder.api_key(api_key);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

/// 列出支持内容生成的模型。
#[derive(Debug, Parser)]
#[command(name = "list-models", version)]
pub struct ListModelsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// 每页请求的模型数。
    #[arg(long)]
    pub page_size: Option<i32>,
}

impl ListModelsArgs {
    #[must_use]
    pub fn list_config(&self) -> ListModelsConfig {
        ListModelsConfig {
            page_size: self.page_size,
            page_token: None,
        }
    }
}

/// 向模型发送一条提示词并打印回复。
#[derive(Debug, Parser)]
#[command(name = "prompt", version)]
pub struct PromptArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// 模型名，可带或不带 `models/` 前缀。
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// 提示词文本。
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// 指定输出 MIME 类型，例如 application/json。
    #[arg(long)]
    pub response_mime_type: Option<String>,
}

impl PromptArgs {
    #[must_use]
    pub fn prompt_request(&self) -> PromptRequest {
        PromptRequest {
            model: self.model.clone(),
            prompt: self.prompt.clone(),
            response_mime_type: self.response_mime_type.clone(),
        }
    }
}

/// 加载 `.env`（若存在）并安装输出到 stderr 的 `fmt` subscriber。
///
/// 日志级别由 `RUST_LOG` 控制，默认 `warn`。
pub fn init() {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_env;

    #[test]
    fn prompt_args_default_to_original_literals() {
        with_env(&[("GEMINI_API_KEY", None)], || {
            let args = PromptArgs::try_parse_from(["prompt"]).unwrap();
            assert_eq!(args.prompt_request(), PromptRequest::default());
            assert!(args.connection.api_key.is_none());
        });
    }

    #[test]
    fn prompt_args_accept_overrides() {
        let args = PromptArgs::try_parse_from([
            "prompt",
            "--model",
            "models/gemini-2.0-flash",
            "--prompt",
            "hello",
            "--response-mime-type",
            "application/json",
            "--timeout",
            "5",
            "--api-key",
            "flag-key",
        ])
        .unwrap();
        let request = args.prompt_request();
        assert_eq!(request.model, "models/gemini-2.0-flash");
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.response_mime_type.as_deref(), Some("application/json"));
        assert_eq!(args.connection.timeout, Some(5));
        assert_eq!(args.connection.api_key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn list_args_page_size() {
        let args = ListModelsArgs::try_parse_from(["list-models", "--page-size", "50"]).unwrap();
        let config = args.list_config();
        assert_eq!(config.page_size, Some(50));
        assert!(config.page_token.is_none());
    }

    #[test]
    fn flag_key_takes_precedence_over_env() {
        with_env(
            &[
                ("GEMINI_API_KEY", Some("env-key")),
                ("GOOGLE_API_KEY", None),
                ("GEMINI_TIMEOUT_SECS", None),
            ],
            || {
                let connection = ConnectionArgs {
                    api_key: Some("flag-key".into()),
                    timeout: Some(3),
                };
                let client = connection.build_client().unwrap();
                assert_eq!(client.config().api_key, "flag-key");
                assert_eq!(client.config().http_options.timeout, Some(3));
            },
        );
    }

    #[test]
    fn blank_flag_key_falls_back_to_google_key() {
        with_env(
            &[
                ("GEMINI_API_KEY", Some("   ")),
                ("GOOGLE_API_KEY", Some("google-key")),
                ("GEMINI_TIMEOUT_SECS", None),
            ],
            || {
                let args = ListModelsArgs::try_parse_from(["list-models"]).unwrap();
                let client = args.connection.build_client().unwrap();
                assert_eq!(client.config().api_key, "google-key");
            },
        );
    }

    #[test]
    fn missing_key_is_a_config_error() {
        with_env(
            &[
                ("GEMINI_API_KEY", None),
                ("GOOGLE_API_KEY", None),
                ("GEMINI_TIMEOUT_SECS", None),
            ],
            || {
                let err = ConnectionArgs::default().build_client().err().unwrap();
                assert!(matches!(err, crate::Error::InvalidConfig { .. }));
            },
        );
    }
}
