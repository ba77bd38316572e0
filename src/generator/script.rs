//! Postman `pm.*` test scripts to Playwright assertions
//!
//! The rewriter recognises a fixed set of call shapes from the Postman
//! sandbox API and replaces each with its Playwright counterpart. Rules run
//! in declaration order over the whole script text; the last rule strips
//! any `pm.` prefix still left, so unknown shapes pass through as bare
//! identifiers instead of failing generation.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// One recognised call shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewriteRule {
    /// `pm.expect(function () { pm.response.json(); }).to.not.throw();`
    JsonDoesNotThrow,
    /// `pm.variables.get("name")`
    VariableGet,
    /// `pm.test("name", function () {`
    TestBlock,
    /// `pm.expect`
    Expect,
    /// `pm.response.to.have.status(N)`
    StatusEquals,
    /// `pm.response.code`
    StatusCode,
    /// `pm.response.status`
    StatusText,
    /// `pm.response.to.be.json`
    ContentTypeJson,
    /// `pm.response.json()`
    BodyJson,
    /// `pm.response.text()`
    BodyText,
    /// `pm.response.headers.get('Name')`
    HeaderGet,
    /// `pm.response.to.have.header("Name")`
    HeaderPresent,
    /// `pm.response.responseTime`
    ResponseTime,
    /// `pm.request.url`
    RequestUrl,
    /// any remaining `pm.`
    StripNamespace,
}

impl RewriteRule {
    /// Application order. Specific shapes come before the broad ones that
    /// would otherwise swallow them, and the namespace sweep comes last.
    pub const ALL: [RewriteRule; 15] = [
        RewriteRule::JsonDoesNotThrow,
        RewriteRule::VariableGet,
        RewriteRule::TestBlock,
        RewriteRule::Expect,
        RewriteRule::StatusEquals,
        RewriteRule::StatusCode,
        RewriteRule::StatusText,
        RewriteRule::ContentTypeJson,
        RewriteRule::BodyJson,
        RewriteRule::BodyText,
        RewriteRule::HeaderGet,
        RewriteRule::HeaderPresent,
        RewriteRule::ResponseTime,
        RewriteRule::RequestUrl,
        RewriteRule::StripNamespace,
    ];

    fn pattern(self) -> &'static str {
        match self {
            RewriteRule::JsonDoesNotThrow => {
                r"pm\.expect\s*\(\s*function\s*\(\)\s*\{\s*pm\.response\.json\(\)\s*;\s*\}\s*\)\s*\.to\s*\.not\s*\.throw\s*\(\s*\)\s*;"
            }
            RewriteRule::VariableGet => r#"pm\.variables\.get\("([^"]+)"\)"#,
            RewriteRule::TestBlock => r#"pm\.test\("([^"]+)"\s*,\s*function\s*\(\)\s*\{"#,
            RewriteRule::Expect => r"pm\.expect",
            RewriteRule::StatusEquals => r"pm\.response\.to\.have\.status\((\d+)\)",
            RewriteRule::StatusCode => r"pm\.response\.code",
            RewriteRule::StatusText => r"pm\.response\.status",
            RewriteRule::ContentTypeJson => r"pm\.response\.to\.be\.json",
            RewriteRule::BodyJson => r"pm\.response\.json\(\)",
            RewriteRule::BodyText => r"pm\.response\.text\(\)",
            RewriteRule::HeaderGet => r"pm\.response\.headers\.get\('([^']+)'\)",
            RewriteRule::HeaderPresent => r#"pm\.response\.to\.have\.header\("([^"]+)"\)"#,
            RewriteRule::ResponseTime => r"pm\.response\.responseTime",
            RewriteRule::RequestUrl => r"pm\.request\.url",
            RewriteRule::StripNamespace => r"pm\.",
        }
    }

    fn render(self, caps: &Captures) -> String {
        match self {
            RewriteRule::JsonDoesNotThrow => concat!(
                "\n",
                "  await test.step(\"Response body is valid JSON\", async () => {\n",
                "    const body = await response.text();\n",
                "    expect(() => JSON.parse(body)).not.toThrow();\n",
                "  });\n",
            )
            .to_string(),
            RewriteRule::VariableGet => format!("vars[\"{}\"]", &caps[1]),
            RewriteRule::TestBlock => format!("await test.step(\"{}\", async () => {{", &caps[1]),
            RewriteRule::Expect => "expect".to_string(),
            RewriteRule::StatusEquals => format!("expect(response.status()).toBe({})", &caps[1]),
            RewriteRule::StatusCode => "response.status()".to_string(),
            RewriteRule::StatusText => {
                "(response.ok() ? \"OK\" : String(response.status()))".to_string()
            }
            RewriteRule::ContentTypeJson => concat!(
                "expect((response.headers()[\"content-type\"] || ",
                "response.headers()[\"Content-Type\"] || \"\").toLowerCase())",
                ".toContain(\"application/json\")",
            )
            .to_string(),
            RewriteRule::BodyJson => "await response.json()".to_string(),
            RewriteRule::BodyText => "await response.text()".to_string(),
            RewriteRule::HeaderGet => header_lookup(&caps[1]),
            RewriteRule::HeaderPresent => {
                format!("expect(Boolean({})).toBeTruthy()", header_lookup(&caps[1]))
            }
            RewriteRule::ResponseTime => "elapsedMs".to_string(),
            RewriteRule::RequestUrl => "requestUrl".to_string(),
            RewriteRule::StripNamespace => String::new(),
        }
    }
}

/// Lower-cased header name first, then the name as written
fn header_lookup(name: &str) -> String {
    format!(
        "response.headers()[\"{}\"] || response.headers()[\"{}\"]",
        name.to_lowercase(),
        name
    )
}

static RULES: LazyLock<Vec<(RewriteRule, Regex)>> = LazyLock::new(|| {
    RewriteRule::ALL
        .iter()
        .map(|&rule| {
            let regex = Regex::new(rule.pattern()).expect("rewrite rule pattern is valid");
            (rule, regex)
        })
        .collect()
});

/// What a rewrite did, for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Number of matches per rule, in application order; rules that never
    /// matched are omitted
    pub matches: Vec<(RewriteRule, usize)>,
}

impl RewriteReport {
    pub fn count(&self, rule: RewriteRule) -> usize {
        self.matches
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// `pm.` prefixes removed without a dedicated translation
    pub fn stripped(&self) -> usize {
        self.count(RewriteRule::StripNamespace)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRewriter;

impl ScriptRewriter {
    pub fn new() -> Self {
        Self
    }

    pub fn rewrite(&self, lines: &[String]) -> String {
        self.rewrite_with_report(lines).0
    }

    pub fn rewrite_with_report(&self, lines: &[String]) -> (String, RewriteReport) {
        let mut script = lines.join("\n");
        let mut report = RewriteReport::default();

        for (rule, regex) in RULES.iter() {
            let mut hits = 0;
            let rewritten = regex.replace_all(&script, |caps: &Captures| {
                hits += 1;
                rule.render(caps)
            });
            if hits > 0 {
                script = rewritten.into_owned();
                report.matches.push((*rule, hits));
            }
        }

        (script, report)
    }
}
