//! Declarative operation descriptors and argument preparation.
//!
//! Every upstream endpoint is described by an [`Operation`]: HTTP method,
//! path template, parameter contract, and payload placement. Calling
//! [`Operation::prepare`] validates caller arguments against the contract
//! and yields the [`RequestParts`] a [`super::ServiceClient`] sends.

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::{AppError, Result};

/// JSON type accepted for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON string.
    String,
    /// Any JSON number.
    Number,
    /// Number restricted to `0` or `1`.
    Flag,
    /// JSON boolean.
    Boolean,
    /// JSON object.
    Object,
    /// Array of strings.
    StringArray,
    /// Array of objects.
    ObjectArray,
}

impl ParamKind {
    fn schema(self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Number => json!({ "type": "number" }),
            Self::Flag => json!({ "type": "number", "enum": [0, 1] }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Object => json!({ "type": "object" }),
            Self::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            Self::ObjectArray => json!({ "type": "array", "items": { "type": "object" } }),
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Flag => matches!(value.as_u64(), Some(0 | 1)),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Self::ObjectArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_object)),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::Flag => "0 or 1",
            Self::Boolean => "a boolean",
            Self::Object => "an object",
            Self::StringArray => "an array of strings",
            Self::ObjectArray => "an array of objects",
        }
    }
}

/// One named field of an operation's parameter contract.
#[derive(Debug, Clone)]
pub struct Param {
    name: &'static str,
    description: &'static str,
    kind: ParamKind,
    required: bool,
    allowed: &'static [&'static str],
    wire: Option<&'static str>,
    nullable: bool,
}

impl Param {
    fn new(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            allowed: &[],
            wire: None,
            nullable: false,
        }
    }

    /// String parameter.
    #[must_use]
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::String)
    }

    /// Numeric parameter.
    #[must_use]
    pub fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Number)
    }

    /// `0`/`1` flag parameter.
    #[must_use]
    pub fn flag(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Flag)
    }

    /// Boolean parameter.
    #[must_use]
    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Boolean)
    }

    /// Free-form object parameter.
    #[must_use]
    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Object)
    }

    /// Array-of-strings parameter.
    #[must_use]
    pub fn string_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::StringArray)
    }

    /// Array-of-objects parameter.
    #[must_use]
    pub fn object_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::ObjectArray)
    }

    /// Mark the parameter as mandatory.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a string parameter to a fixed set of values.
    #[must_use]
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    /// Send the parameter upstream under a different name.
    #[must_use]
    pub fn wire(mut self, wire: &'static str) -> Self {
        self.wire = Some(wire);
        self
    }

    /// Accept an explicit `null` and forward it upstream.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Parameter name as seen by callers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the parameter is mandatory.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Name used on the wire.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        self.wire.unwrap_or(self.name)
    }

    fn schema(&self) -> Value {
        let mut schema = self.kind.schema();
        if let Value::Object(map) = &mut schema {
            if !self.allowed.is_empty() {
                map.insert("enum".into(), json!(self.allowed));
            }
            if self.nullable {
                let base = map.remove("type").unwrap_or(Value::Null);
                map.insert("type".into(), json!([base, "null"]));
            }
            if !self.description.is_empty() {
                map.insert("description".into(), json!(self.description));
            }
        }
        schema
    }

    fn check(&self, value: &Value) -> Result<()> {
        if value.is_null() && self.nullable {
            return Ok(());
        }
        if !self.kind.accepts(value) {
            return Err(AppError::InvalidParams(format!(
                "parameter '{}' must be {}",
                self.name,
                self.kind.label()
            )));
        }
        if !self.allowed.is_empty() {
            let valid = value.as_str().is_some_and(|v| self.allowed.contains(&v));
            if !valid {
                return Err(AppError::InvalidParams(format!(
                    "parameter '{}' must be one of: {}",
                    self.name,
                    self.allowed.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Path selection for an operation.
#[derive(Debug, Clone)]
pub enum Route {
    /// A single path template.
    Fixed(&'static str),
    /// Template chosen by the value of a discriminator parameter.
    ///
    /// The discriminator is consumed and never sent upstream. Values
    /// without a listed alternative use `default`.
    ByValue {
        /// Discriminator parameter name.
        param: &'static str,
        /// `(value, template)` alternatives.
        routes: &'static [(&'static str, &'static str)],
        /// Template used when no alternative matches.
        default: &'static str,
    },
}

/// Where the arguments left after path substitution are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Nothing is sent besides the path; leftover arguments are dropped.
    None,
    /// URL query string.
    Query,
    /// JSON object body.
    Body,
    /// The named argument's value is sent as the whole body.
    BodyField(&'static str),
    /// JSON:API envelope `{"data":{"type":T,"attributes":{..}}}`.
    JsonApi(&'static str),
}

/// Fully prepared upstream request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParts {
    /// HTTP method.
    pub method: Method,
    /// Decoded path segments, appended to the service base URL.
    pub segments: Vec<String>,
    /// Query pairs in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl RequestParts {
    /// Bodiless `GET` for a literal path such as `/teammates`.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::GET,
            segments: split_path(path),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query pair.
    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Path as sent, with segments joined by `/`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Declarative description of one upstream endpoint.
#[derive(Debug, Clone)]
pub struct Operation {
    name: &'static str,
    description: &'static str,
    method: Method,
    route: Route,
    params: Vec<Param>,
    payload: Payload,
}

impl Operation {
    fn new(method: Method, name: &'static str, path: &'static str) -> Self {
        let payload = if method == Method::GET || method == Method::DELETE {
            Payload::Query
        } else {
            Payload::Body
        };
        Self {
            name,
            description: "",
            method,
            route: Route::Fixed(path),
            params: Vec::new(),
            payload,
        }
    }

    /// `GET` operation; arguments go to the query string.
    #[must_use]
    pub fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(Method::GET, name, path)
    }

    /// `POST` operation; arguments go to the JSON body.
    #[must_use]
    pub fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(Method::POST, name, path)
    }

    /// `PUT` operation; arguments go to the JSON body.
    #[must_use]
    pub fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(Method::PUT, name, path)
    }

    /// `PATCH` operation; arguments go to the JSON body.
    #[must_use]
    pub fn patch(name: &'static str, path: &'static str) -> Self {
        Self::new(Method::PATCH, name, path)
    }

    /// `DELETE` operation; arguments go to the query string.
    #[must_use]
    pub fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(Method::DELETE, name, path)
    }

    /// Set the human-readable description.
    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Append a parameter to the contract.
    #[must_use]
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Send remaining arguments as a JSON body regardless of method.
    #[must_use]
    pub fn body(mut self) -> Self {
        self.payload = Payload::Body;
        self
    }

    /// Send no payload at all.
    #[must_use]
    pub fn no_payload(mut self) -> Self {
        self.payload = Payload::None;
        self
    }

    /// Send the value of `field` as the entire body.
    #[must_use]
    pub fn body_field(mut self, field: &'static str) -> Self {
        self.payload = Payload::BodyField(field);
        self
    }

    /// Wrap remaining arguments in a JSON:API envelope of `resource_type`.
    #[must_use]
    pub fn json_api(mut self, resource_type: &'static str) -> Self {
        self.payload = Payload::JsonApi(resource_type);
        self
    }

    /// Choose between path templates by the value of `param`.
    #[must_use]
    pub fn route_by(
        mut self,
        param: &'static str,
        routes: &'static [(&'static str, &'static str)],
    ) -> Self {
        let default = match self.route {
            Route::Fixed(path) | Route::ByValue { default: path, .. } => path,
        };
        self.route = Route::ByValue {
            param,
            routes,
            default,
        };
        self
    }

    /// Unique operation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Parameter contract.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Payload placement.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// JSON Schema describing the parameter contract.
    #[must_use]
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|param| (param.name.to_owned(), param.schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name)
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }
        schema
    }

    /// Validate `arguments` against the contract and build the upstream request.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParams` for unknown, missing, or mistyped
    /// arguments, or when `arguments` is not a JSON object.
    pub fn prepare(&self, arguments: Option<&Map<String, Value>>) -> Result<RequestParts> {
        let mut args = self.validate(arguments)?;

        let template = match &self.route {
            Route::Fixed(path) => path,
            Route::ByValue {
                param,
                routes,
                default,
            } => {
                let selector = args.remove(*param);
                let selector = selector.as_ref().and_then(Value::as_str);
                routes
                    .iter()
                    .find(|(value, _)| Some(*value) == selector)
                    .map_or(default, |(_, path)| path)
            }
        };

        let mut segments = Vec::new();
        for raw in template.split('/').filter(|s| !s.is_empty()) {
            match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(placeholder) => {
                    let value = args.remove(placeholder).ok_or_else(|| {
                        AppError::InvalidParams(format!(
                            "missing required parameter '{placeholder}'"
                        ))
                    })?;
                    segments.push(scalar_string(&value));
                }
                None => segments.push(raw.to_owned()),
            }
        }

        let mut wire = Map::new();
        for (name, value) in args {
            let key = self
                .params
                .iter()
                .find(|param| param.name == name)
                .map_or_else(|| name.clone(), |param| param.wire_name().to_owned());
            wire.insert(key, value);
        }

        let mut query = Vec::new();
        let body = match &self.payload {
            Payload::None => None,
            Payload::Query => {
                append_query(&mut query, wire);
                None
            }
            Payload::Body => Some(Value::Object(wire)),
            Payload::BodyField(field) => {
                let value = wire.remove(*field).unwrap_or(Value::Null);
                append_query(&mut query, wire);
                Some(value)
            }
            Payload::JsonApi(resource_type) => Some(json!({
                "data": { "type": resource_type, "attributes": wire }
            })),
        };

        Ok(RequestParts {
            method: self.method.clone(),
            segments,
            query,
            body,
        })
    }

    fn validate(&self, arguments: Option<&Map<String, Value>>) -> Result<Map<String, Value>> {
        let mut args = arguments.cloned().unwrap_or_default();

        if let Some(unknown) = args
            .keys()
            .find(|key| !self.params.iter().any(|param| param.name == key.as_str()))
        {
            return Err(AppError::InvalidParams(format!(
                "unknown parameter '{unknown}' for {}",
                self.name
            )));
        }

        for param in &self.params {
            if !param.nullable && args.get(param.name).is_some_and(Value::is_null) {
                args.remove(param.name);
            }
            match args.get(param.name) {
                Some(value) => param.check(value)?,
                None if param.required => {
                    return Err(AppError::InvalidParams(format!(
                        "missing required parameter '{}'",
                        param.name
                    )));
                }
                None => {}
            }
        }

        Ok(args)
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn append_query(query: &mut Vec<(String, String)>, args: Map<String, Value>) {
    for (key, value) in args {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = format!("{key}[]");
                for item in items {
                    query.push((key.clone(), scalar_string(&item)));
                }
            }
            other => query.push((key, scalar_string(&other))),
        }
    }
}
