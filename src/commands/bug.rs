//! Bug Commands
//!
//! REST endpoints for bugs and the `BugApi` implementation on top of them.

use async_trait::async_trait;

use bug_list_core::endpoint::encode_body;
use bug_list_core::{ApiResult, Bug, BugApi, BugInput, Endpoint};

use super::{read_json, request};

// ========================
// Commands
// ========================

pub async fn get_bugs() -> ApiResult<Vec<Bug>> {
    let response = request(Endpoint::ListBugs, None).await?;
    read_json(response).await
}

pub async fn create_bug(input: &BugInput) -> ApiResult<Bug> {
    let response = request(Endpoint::CreateBug, Some(encode_body(input)?)).await?;
    read_json(response).await
}

pub async fn update_bug(id: &str, input: &BugInput) -> ApiResult<Bug> {
    let response = request(Endpoint::UpdateBug(id), Some(encode_body(input)?)).await?;
    read_json(response).await
}

pub async fn delete_bug(id: &str) -> ApiResult<()> {
    request(Endpoint::DeleteBug(id), None).await?;
    Ok(())
}

/// `BugApi` over the REST endpoints above
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBugApi;

#[async_trait(?Send)]
impl BugApi for HttpBugApi {
    async fn get_bugs(&self) -> ApiResult<Vec<Bug>> {
        get_bugs().await
    }

    async fn create_bug(&self, input: &BugInput) -> ApiResult<Bug> {
        create_bug(input).await
    }

    async fn update_bug(&self, id: &str, input: &BugInput) -> ApiResult<Bug> {
        update_bug(id, input).await
    }

    async fn delete_bug(&self, id: &str) -> ApiResult<()> {
        delete_bug(id).await
    }
}
