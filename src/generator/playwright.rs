//! Playwright test emitter
//!
//! Each request becomes one `@playwright/test` module holding a single
//! test: the request is issued through the `request` fixture, timed, and
//! the rewritten Postman assertions run as `test.step`s afterwards.

use super::headers::resolve_headers;
use super::script::ScriptRewriter;
use super::template::resolve_optional;
use super::Emitter;
use crate::error::Result;
use crate::models::{RequestItem, TestScript, VariableMapping};

pub const SPEC_SUFFIX: &str = ".spec.js";

/// Methods exposed directly on Playwright's `APIRequestContext`
const CONTEXT_METHODS: [&str; 6] = ["get", "post", "put", "patch", "delete", "head"];

#[derive(Debug, Clone, Default)]
pub struct PlaywrightEmitter {
    rewriter: ScriptRewriter,
}

impl PlaywrightEmitter {
    pub fn new() -> Self {
        Self {
            rewriter: ScriptRewriter::new(),
        }
    }

    /// Generate the request call for the method
    fn generate_call(method: &str, url: &str) -> String {
        let method = method.to_lowercase();
        let url = js_template_literal(url);

        if CONTEXT_METHODS.contains(&method.as_str()) {
            format!("await request.{}(`{}`, {{ headers }})", method, url)
        } else {
            format!(
                "await request.fetch(`{}`, {{ method: '{}', headers }})",
                url,
                js_single_quoted(&method.to_uppercase())
            )
        }
    }

    /// Rewrite the test script and indent its first line into the body
    fn generate_assertions(&self, request: &RequestItem, script: &TestScript) -> String {
        let (body, report) = self.rewriter.rewrite_with_report(&script.lines);

        tracing::debug!(request = %request.name, rules = ?report.matches, "test script rewritten");
        if report.stripped() > 0 {
            tracing::warn!(
                request = %request.name,
                stripped = report.stripped(),
                "test script uses pm.* calls without a Playwright translation; the prefix was dropped"
            );
        }

        match script.label {
            Some(ref label) => format!("// Script: {}\n  {}", label, body),
            None => format!("  {}", body),
        }
    }
}

impl Emitter for PlaywrightEmitter {
    fn file_suffix(&self) -> &'static str {
        SPEC_SUFFIX
    }

    fn emit_request(&self, request: &RequestItem, vars: &VariableMapping) -> Result<String> {
        let url = resolve_optional(request.url.as_deref(), vars).unwrap_or_default();
        let headers = resolve_headers(&request.headers, vars);

        let mut lines = Vec::new();

        lines.push("import { test, expect } from '@playwright/test';".to_string());
        lines.push(String::new());
        lines.push(format!(
            "test('{}', async ({{ request }}) => {{",
            js_single_quoted(&request.name)
        ));
        lines.push(format!("  const requestUrl = '{}';", js_single_quoted(&url)));
        lines.push(format!(
            "  const headers = {};",
            serde_json::to_string_pretty(&headers)?
        ));
        lines.push(String::new());

        lines.push("  const t0 = Date.now();".to_string());
        lines.push(format!(
            "  const response = {};",
            Self::generate_call(&request.method, &url)
        ));
        lines.push("  const elapsedMs = Date.now() - t0;".to_string());
        lines.push(String::new());

        lines.push("  // Response headers with lower-cased names".to_string());
        lines.push("  const hdr = {};".to_string());
        lines.push(
            "  for (const [k, val] of Object.entries(response.headers())) hdr[k.toLowerCase()] = val;"
                .to_string(),
        );
        lines.push(String::new());

        lines.push(format!("  const vars = {};", serde_json::to_string_pretty(vars)?));

        if let Some(ref script) = request.test_script {
            lines.push(String::new());
            lines.push(self.generate_assertions(request, script));
        }

        lines.push("});".to_string());
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}

/// Body of a single-quoted JS string literal
fn js_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Body of a JS template literal, with no interpolation
fn js_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
