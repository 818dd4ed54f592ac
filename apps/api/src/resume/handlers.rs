use axum::{
    body::Body,
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::errors::AppError;
use crate::resume::scratch::ScratchFile;
use crate::state::AppState;

const RESUME_TEXT: &str = "John Doe's Resume - Data Engineer & DevOps Specialist";
const DOWNLOAD_FILENAME: &str = "john_doe_resume.txt";
const DOWNLOAD_FAILED: &str = "Failed to download resume";

/// GET /api/resume/download
pub async fn handle_resume_download(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let scratch = ScratchFile::create(&state.config.resume_scratch_dir, RESUME_TEXT.as_bytes())
        .await
        .map_err(|e| AppError::io(DOWNLOAD_FAILED, e))?;

    let stream = scratch
        .into_stream()
        .await
        .map_err(|e| AppError::io(DOWNLOAD_FAILED, e))?;

    let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        Body::from_stream(stream),
    ))
}
