//! Uploads API.
//!
//! Uploading is two calls: `POST /uploads` issues a single-use URL, then the
//! file is posted there as multipart form data. The returned token is then
//! attached to a message with the matching
//! [`AttachmentRequest`](crate::AttachmentRequest) constructor.

use crate::client::{ApiRequest, MaxClient, Query};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::types::{PhotoTokens, UploadEndpoint, UploadType, UploadedInfo, VideoAttachmentDetails};

/// Uploads API client.
pub struct UploadsApi {
    client: MaxClient,
}

impl UploadsApi {
    pub(crate) fn new(client: MaxClient) -> Self {
        Self { client }
    }

    /// Request an upload URL for a file of `upload_type`.
    pub async fn upload_url(&self, ctx: &Context, upload_type: UploadType) -> Result<UploadEndpoint> {
        let mut query = Query::new();
        query.push("type", upload_type.as_str());
        self.client
            .execute(ctx, ApiRequest::post("get_upload_url", &["uploads"]).query(query))
            .await
    }

    /// Upload an image and return its photo tokens.
    pub async fn photo(
        &self,
        ctx: &Context,
        filename: &str,
        data: impl Into<reqwest::Body>,
    ) -> Result<PhotoTokens> {
        const OP: &str = "upload_photo";
        let endpoint = self.upload_url(ctx, UploadType::Image).await?;
        let body = self
            .client
            .upload(ctx, OP, &endpoint.url, filename, data.into())
            .await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(OP, e))
    }

    /// Upload a video, audio clip or file and return its token.
    pub async fn media(
        &self,
        ctx: &Context,
        upload_type: UploadType,
        filename: &str,
        data: impl Into<reqwest::Body>,
    ) -> Result<UploadedInfo> {
        const OP: &str = "upload_media";
        let endpoint = self.upload_url(ctx, upload_type).await?;
        let body = self
            .client
            .upload(ctx, OP, &endpoint.url, filename, data.into())
            .await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(OP, e))
    }

    /// Details of an uploaded video.
    pub async fn video_details(
        &self,
        ctx: &Context,
        video_token: &str,
    ) -> Result<VideoAttachmentDetails> {
        self.client
            .execute(
                ctx,
                ApiRequest::get("get_video_details", &["videos", video_token]),
            )
            .await
    }
}
