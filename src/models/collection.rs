use crate::error::{PostwrightError, Result};
use serde::Deserialize;

/// Postman collection root object (v2.x)
/// https://schema.postman.com/collection/json/v2.1.0/draft-07/docs/index.html
#[derive(Debug, Clone, Deserialize)]
pub struct RawCollection {
    /// Collection metadata
    #[serde(default)]
    pub info: CollectionInfo,

    /// Top-level folders and requests
    #[serde(default)]
    pub item: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionInfo {
    /// Display name of the collection
    #[serde(default)]
    pub name: Option<String>,

    /// Schema URL identifying the collection format version
    #[serde(default)]
    pub schema: Option<String>,
}

/// A folder or request as it appears in the document. Which one it is
/// depends on whether `item` or `request` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub item: Option<Vec<RawItem>>,

    #[serde(default)]
    pub request: Option<RawRequest>,

    #[serde(default)]
    pub event: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequest {
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub url: Option<RawUrl>,

    #[serde(default)]
    pub header: Vec<HeaderDeclaration>,
}

/// `url` is either a bare string or a structured object carrying `raw`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawUrl {
    Plain(String),
    Structured {
        #[serde(default)]
        raw: Option<String>,
    },
}

impl RawUrl {
    fn into_raw(self) -> Option<String> {
        match self {
            RawUrl::Plain(raw) => Some(raw),
            RawUrl::Structured { raw } => raw,
        }
    }
}

/// A declared request header; both sides may contain `{{placeholders}}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderDeclaration {
    pub key: String,

    #[serde(default)]
    pub value: String,
}

impl HeaderDeclaration {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event kind: "test" or "prerequest"
    pub listen: String,

    #[serde(default)]
    pub script: Option<Script>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub exec: Option<ScriptSource>,
}

/// `exec` is an array of lines, but single-string scripts exist in the wild
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptSource {
    Lines(Vec<String>),
    Text(String),
}

impl ScriptSource {
    fn into_lines(self) -> Vec<String> {
        match self {
            ScriptSource::Lines(lines) => lines,
            ScriptSource::Text(text) => text.lines().map(str::to_string).collect(),
        }
    }
}

/// Validated collection
#[derive(Debug, Clone)]
pub struct Collection {
    pub info: CollectionInfo,
    pub items: Vec<CollectionNode>,
}

#[derive(Debug, Clone)]
pub enum CollectionNode {
    Folder(Folder),
    Request(RequestItem),
}

impl CollectionNode {
    pub fn name(&self) -> &str {
        match self {
            CollectionNode::Folder(folder) => &folder.name,
            CollectionNode::Request(request) => &request.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Folder {
    pub name: String,
    pub children: Vec<CollectionNode>,
}

#[derive(Debug, Clone)]
pub struct RequestItem {
    pub name: String,
    /// Upper-case HTTP verb
    pub method: String,
    /// Raw URL template, if the request declares one
    pub url: Option<String>,
    pub headers: Vec<HeaderDeclaration>,
    pub test_script: Option<TestScript>,
}

impl RequestItem {
    pub fn new(name: impl Into<String>, method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: method.into().to_uppercase(),
            url: Some(url.into()),
            headers: Vec::new(),
            test_script: None,
        }
    }
}

/// Body of a `test` event script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScript {
    pub lines: Vec<String>,
    pub label: Option<String>,
}

impl TryFrom<RawCollection> for Collection {
    type Error = PostwrightError;

    fn try_from(raw: RawCollection) -> Result<Self> {
        let items = raw
            .item
            .into_iter()
            .map(|item| convert_item(item, ""))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            info: raw.info,
            items,
        })
    }
}

fn convert_item(raw: RawItem, parent_trail: &str) -> Result<CollectionNode> {
    let trail = format!("{}/{}", parent_trail, raw.name);

    match (raw.item, raw.request) {
        (Some(children), None) => {
            let children = children
                .into_iter()
                .map(|child| convert_item(child, &trail))
                .collect::<Result<Vec<_>>>()?;
            Ok(CollectionNode::Folder(Folder {
                name: raw.name,
                children,
            }))
        }
        (None, Some(request)) => {
            let test_script = raw
                .event
                .into_iter()
                .find(|event| event.listen == "test")
                .and_then(|event| event.script)
                .map(|script| TestScript {
                    lines: script.exec.map(ScriptSource::into_lines).unwrap_or_default(),
                    label: script.name,
                });

            Ok(CollectionNode::Request(RequestItem {
                name: raw.name,
                method: request
                    .method
                    .filter(|m| !m.is_empty())
                    .map(|m| m.to_uppercase())
                    .unwrap_or_else(|| "GET".to_string()),
                url: request.url.and_then(RawUrl::into_raw),
                headers: request.header,
                test_script,
            }))
        }
        (Some(_), Some(_)) => Err(PostwrightError::InvalidNode(format!(
            "'{}' has both 'item' and 'request'",
            trail
        ))),
        (None, None) => Err(PostwrightError::InvalidNode(format!(
            "'{}' has neither 'item' nor 'request'",
            trail
        ))),
    }
}
