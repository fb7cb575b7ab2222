use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::exchange::{publisher, waiter::Waiter, ExchangePaths, ExchangeRequest, RequestParameters};

/// Arguments for the `generate_code` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GenerateCodeRequest {
    /// Detailed description of the code to generate
    #[schemars(description = "Descrizione dettagliata del codice da generare")]
    pub prompt: String,
    /// Target programming language
    #[schemars(
        description = "Linguaggio di programmazione (es: python, javascript, typescript, java, go, rust)"
    )]
    pub language: Option<String>,
    /// Extra context or constraints
    #[schemars(
        description = "Contesto aggiuntivo, requisiti specifici, o vincoli da considerare"
    )]
    pub context: Option<String>,
}

/// Build the natural-language prompt handed to Bob: a language
/// directive up front when one was given, the extra context appended at
/// the end.
pub fn compose_prompt(req: &GenerateCodeRequest) -> String {
    let mut prompt = match &req.language {
        Some(language) => format!("Genera codice in {}:\n\n{}", language, req.prompt),
        None => req.prompt.clone(),
    };
    if let Some(context) = &req.context {
        prompt.push_str(&format!("\n\nContesto aggiuntivo:\n{}", context));
    }
    prompt
}

/// MCP facade over the file-based exchange with Bob.
///
/// One tool, `generate_code`. Each call publishes a request into the
/// exchange directory and polls until the external responder clears the
/// lock marker and leaves a response.
#[derive(Debug, Clone)]
pub struct BobServer {
    paths: ExchangePaths,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BobServer {
    pub fn new(paths: ExchangePaths) -> Self {
        Self {
            paths,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Genera codice in base a una descrizione. Bob analizzerà il prompt e genererà codice di alta qualità nel linguaggio specificato."
    )]
    async fn generate_code(
        &self,
        Parameters(req): Parameters<GenerateCodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = ExchangeRequest {
            tool: "generate_code".into(),
            parameters: RequestParameters {
                prompt: compose_prompt(&req),
                language: req.language,
                context: req.context,
            },
        };

        publisher::publish(&self.paths, &request)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let result = Waiter::new(self.paths.clone())
            .wait()
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }
}

#[tool_handler]
impl ServerHandler for BobServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Bob MCP server. Exposes generate_code, delegated to the external \
                 responder Bob through a file-based exchange directory."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(prompt: &str, language: Option<&str>, context: Option<&str>) -> GenerateCodeRequest {
        GenerateCodeRequest {
            prompt: prompt.into(),
            language: language.map(Into::into),
            context: context.map(Into::into),
        }
    }

    #[test]
    fn prompt_alone_is_undecorated() {
        assert_eq!(compose_prompt(&req("sort a list", None, None)), "sort a list");
    }

    #[test]
    fn language_prefixes_a_directive() {
        let composed = compose_prompt(&req("sort a list", Some("python"), None));
        assert_eq!(composed, "Genera codice in python:\n\nsort a list");
    }

    #[test]
    fn context_is_appended_last() {
        let composed = compose_prompt(&req("sort a list", Some("python"), Some("stable sort")));
        assert_eq!(
            composed,
            "Genera codice in python:\n\nsort a list\n\nContesto aggiuntivo:\nstable sort"
        );
    }

    #[test]
    fn missing_prompt_fails_deserialization_naming_the_field() {
        let err = serde_json::from_str::<GenerateCodeRequest>("{}").unwrap_err();
        assert!(err.to_string().contains("prompt"));
    }

    #[test]
    fn prompt_only_arguments_deserialize() {
        let req: GenerateCodeRequest =
            serde_json::from_str(r#"{"prompt": "sort a list"}"#).unwrap();
        assert_eq!(req.prompt, "sort a list");
        assert!(req.language.is_none());
        assert!(req.context.is_none());
    }
}
