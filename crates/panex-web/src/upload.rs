use axum::extract::Multipart;

/// An uploaded PDF with its data and original filename.
pub struct UploadedPdf {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse a multipart form upload into the PDF it carries.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedPdf, String> {
    let mut file: Option<UploadedPdf> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "pdf" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();

                validate_pdf(&data)?;

                file = Some(UploadedPdf { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| "No file uploaded".to_string())
}

/// Check the PDF magic bytes before handing the data to the pipeline.
fn validate_pdf(data: &[u8]) -> Result<(), String> {
    if !data.starts_with(b"%PDF-") {
        return Err("Uploaded file doesn't appear to be a valid PDF".to_string());
    }
    Ok(())
}
