//! Application configuration.
//!
//! Centralized configuration for the video cutter frontend. Everything
//! here is fixed at compile time: the page, its form and the endpoint
//! are served by the same origin.

/// Endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "/";

/// Value of the `Accept` header sent with the upload.
pub const ACCEPT_JSON: &str = "application/json";

/// Application name, used as the page title.
pub const APP_NAME: &str = "Corte de Vídeos";

// =============================================================================
// DOM contract
// =============================================================================

/// Identifier of the upload form.
pub const FORM_ID: &str = "videoForm";

/// Identifier of the status message container.
pub const MESSAGE_ID: &str = "message";

/// Form field carrying the video file.
pub const FIELD_FILE: &str = "file";

/// Form field carrying the segment duration, in seconds.
pub const FIELD_SEGMENT_DURATION: &str = "segmento_duracao";

/// Form field carrying the seconds removed from the end of each segment.
pub const FIELD_REMOVAL_INTERVAL: &str = "intervalo_remocao";

/// Video extensions the server accepts (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "mkv"];

/// `accept` attribute of the file input.
pub const ACCEPTED_FILE_TYPES: &str = ".mp4,.mov,.avi,.mkv";

// =============================================================================
// User-facing messages
// =============================================================================

pub const MISSING_DOWNLOAD_LINK_MESSAGE: &str = "Erro: Link de download ausente.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Ocorreu um erro inesperado.";
pub const NETWORK_ERROR_MESSAGE: &str = "Falha de rede ao enviar o vídeo.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Resposta inválida do servidor.";

pub const INVALID_FILE_MESSAGE: &str =
    "Arquivo inválido ou não enviado. Envie um arquivo de vídeo válido.";
pub const NOT_INTEGER_MESSAGE: &str =
    "Os campos de duração e intervalo devem ser números inteiros.";
pub const INTERVAL_TOO_LARGE_MESSAGE: &str =
    "O intervalo de remoção deve ser menor que a duração do segmento.";
pub const NON_POSITIVE_SEGMENT_MESSAGE: &str =
    "A duração do segmento deve ser maior que zero.";

/// Message shown when an error response carries no `error` field.
pub fn status_error_message(status: u16) -> String {
    format!("Erro {} ao processar o vídeo.", status)
}
