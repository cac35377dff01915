//! Video playback requests.

/// A video element to insert into the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequest {
    /// Full source URL for the video element.
    pub src: String,
}

/// Build the source URL for a requested video file.
///
/// `base_path` comes from config (default "/static/video") and sits under
/// the application's context path.
pub fn video_request(context_path: &str, base_path: &str, name: &str) -> VideoRequest {
    VideoRequest {
        src: format!("{context_path}{base_path}/{name}"),
    }
}
