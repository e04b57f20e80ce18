//! Conversion of parse results into the shapes a language server
//! publishes. The server itself (transport, document sync) lives elsewhere.

use lsp_types::{
    DiagnosticRelatedInformation, DiagnosticSeverity, Location, Position,
    PublishDiagnosticsParams, Range, Uri,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::language::{self, Deck, Severity};

const SOURCE: &str = "mcnp";

pub fn to_lsp_diagnostic(uri: &Uri, diagnostic: &language::Diagnostic) -> lsp_types::Diagnostic {
    let range = to_lsp_range(&diagnostic.range);

    let severity = match diagnostic.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Information => DiagnosticSeverity::INFORMATION,
        Severity::Hint => DiagnosticSeverity::HINT,
    };

    let related_information = diagnostic
        .related
        .as_ref()
        .map(|message| {
            vec![DiagnosticRelatedInformation {
                location: Location {
                    uri: uri.clone(),
                    range,
                },
                message: message.clone(),
            }]
        });

    lsp_types::Diagnostic {
        range,
        severity: Some(severity),
        code: None,
        code_description: None,
        source: Some(SOURCE.to_string()),
        message: diagnostic
            .message
            .clone(),
        related_information,
        tags: None,
        data: None,
    }
}

fn to_lsp_range(range: &language::Range) -> Range {
    Range {
        start: Position {
            line: range
                .start
                .line,
            character: range
                .start
                .character,
        },
        end: Position {
            line: range
                .end
                .line,
            character: range
                .end
                .character,
        },
    }
}

/// Everything found in `deck`, addressed to the document it came from.
pub fn publish_diagnostics_params(
    uri: Uri,
    version: Option<i32>,
    deck: &Deck,
) -> PublishDiagnosticsParams {
    let diagnostics = deck
        .diagnostics
        .iter()
        .map(|diagnostic| to_lsp_diagnostic(&uri, diagnostic))
        .collect::<Vec<_>>();

    debug!("Publishing {} diagnostics for {}", diagnostics.len(), uri.as_str());

    PublishDiagnosticsParams {
        uri,
        diagnostics,
        version,
    }
}

/// Wrap the parameters as a JSON-RPC notification, ready to be written to
/// the client.
pub fn publish_diagnostics_notification(
    params: &PublishDiagnosticsParams,
) -> Result<Value, serde_json::Error> {
    let params = serde_json::to_value(params)?;

    Ok(json!({
        "jsonrpc": "2.0",
        "method": "textDocument/publishDiagnostics",
        "params": params,
    }))
}
