mod client;
mod response;
mod rtmp;

pub use {
    client::{Publisher, PublishingClient, PublishingSettings},
    response::{PrepareStreamingResponse, StreamingAck, UploadResponse},
    rtmp::{RTMP_SCHEME, StreamRoute},
};
