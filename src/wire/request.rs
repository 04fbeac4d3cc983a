// src/wire/request.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::model::bid_request::Size;
use crate::model::consent::ConsentContext;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 传输选项：不携带 cookie / 凭证
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    pub content_type: String,
    pub with_credentials: bool,
}

/// **交给宿主发送的请求描述**
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    /// 请求体（JSON 文本）
    pub data: String,
    pub options: RequestOptions,
}

/// 请求体
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub req_id: String,
    pub imps: Vec<Imp>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    #[serde(flatten)]
    pub consent: ConsentContext,
}

/// 单个广告位描述
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Imp {
    pub bid_id: String,
    pub sizes: Vec<Size>,
    pub ad_unit_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_unit_code: Option<String>,
    /// `params` 中除 `adUnitId` 以外的字段
    pub options: Map<String, Value>,
}
