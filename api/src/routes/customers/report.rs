use actix_web::http::header;
use actix_web::{web, HttpResponse};
use futures_util::stream;

use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

use crm_core::domain::value_objects::period::ReportPeriod;
use crm_core::errors::DomainError;
use crm_core::repositories::CustomerRepository;

/// Chunk size for the streamed PDF body
const PDF_CHUNK_SIZE: usize = 8192;

/// Handler for GET /api/customers/report/{period}
///
/// Renders the customers created within the period as a tabular PDF and
/// streams it back as an attachment. An unrecognized period yields 400
/// before any PDF bytes are produced.
pub async fn customer_report<R>(
    state: web::Data<AppState<R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
{
    let period: ReportPeriod = match path.parse() {
        Ok(period) => period,
        Err(error) => {
            log::warn!("rejected report request for period {:?}", path.as_str());
            return domain_error_response(&DomainError::ValidationErr(error));
        }
    };

    match state.report_service.generate(period).await {
        Ok(bytes) => {
            let chunks: Vec<Result<web::Bytes, std::convert::Infallible>> = bytes
                .chunks(PDF_CHUNK_SIZE)
                .map(|chunk| Ok(web::Bytes::copy_from_slice(chunk)))
                .collect();

            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={}", period.file_name()),
                ))
                .streaming(stream::iter(chunks))
        }
        Err(error) => {
            log::error!("{} report generation failed: {}", period, error);
            domain_error_response(&error)
        }
    }
}
