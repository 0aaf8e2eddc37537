use crate::domain_model::AccessToken;
use http::header::{AUTHORIZATION, InvalidHeaderValue};
use http::{HeaderMap, HeaderValue, Method};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        RequestId(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// One field of a `multipart/form-data` body. Parts are kept as owned bytes so
/// the request can be rebuilt for the resend after a refresh.
#[derive(Clone)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } => name,
            FormPart::File { name, .. } => name,
        }
    }
}

impl fmt::Debug for FormPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPart::Text { name, value } => f
                .debug_struct("Text")
                .field("name", name)
                .field("value", value)
                .finish(),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => f
                .debug_struct("File")
                .field("name", name)
                .field("file_name", file_name)
                .field("mime", mime)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// Outbound Request Descriptor: everything needed to (re)send one call.
///
/// `path` is relative to the API base URL. `retried` is the retry marker: it is
/// set once the request has triggered a refresh, and a second 401 on a marked
/// request is never refreshed again.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub id: RequestId,
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub retried: bool,
}

impl OutboundRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        OutboundRequest {
            id: RequestId::new(),
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Token currently attached as bearer credential, if any.
    pub fn bearer_token(&self) -> Option<AccessToken> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(AccessToken::new)
    }

    pub fn set_bearer(&mut self, token: &AccessToken) -> Result<(), InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&token.bearer())?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Characters escaped inside one path segment: the URL delimiters plus the
/// characters a URL parser would rewrite.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, thiserror::Error)]
#[error("{0:?} cannot be used as a path segment")]
pub struct InvalidPathSegment(pub String);

/// Escapes `value` so it stays exactly one path segment.
///
/// Empty and dot segments are refused: URL parsers collapse `.` and `..`
/// (escaped or not), which would address another resource.
pub fn path_segment(value: &str) -> Result<String, InvalidPathSegment> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(InvalidPathSegment(value.to_string()));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_is_attached_and_read_back() {
        let mut request = OutboundRequest::get("/produits");
        assert_eq!(request.bearer_token(), None);

        request.set_bearer(&AccessToken::new("old")).unwrap();
        request.set_bearer(&AccessToken::new("new")).unwrap();

        assert_eq!(request.bearer_token(), Some(AccessToken::new("new")));
        assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert!(!format!("{:?}", request.headers).contains("new"));
    }

    #[test]
    fn optional_query_parameters_are_skipped() {
        let request = OutboundRequest::get("/retours")
            .query("page", 2)
            .query_opt("search", None::<String>)
            .query_opt("perPage", Some(25));

        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("perPage".to_string(), "25".to_string()),
            ]
        );
        assert!(!request.retried);
    }

    #[test]
    fn file_parts_do_not_dump_their_bytes() {
        let part = FormPart::File {
            name: "images".into(),
            file_name: "a.png".into(),
            mime: "image/png".into(),
            bytes: vec![7; 4096],
        };
        let printed = format!("{:?}", part);
        assert!(printed.contains("len: 4096"));
        assert_eq!(part.name(), "images");
    }

    #[test]
    fn ids_stay_a_single_path_segment() {
        assert_eq!(path_segment("c-1").unwrap(), "c-1");
        assert_eq!(path_segment("a?x=1").unwrap(), "a%3Fx=1");
        assert_eq!(path_segment("../users/7").unwrap(), "..%2Fusers%2F7");
        assert_eq!(path_segment("50%#top").unwrap(), "50%25%23top");
    }

    #[test]
    fn dot_and_empty_segments_are_refused() {
        assert!(path_segment("").is_err());
        assert!(path_segment(".").is_err());
        assert!(path_segment("..").is_err());
    }
}
