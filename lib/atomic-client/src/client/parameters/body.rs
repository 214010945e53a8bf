use bytes::{BufMut, Bytes, BytesMut};
use headers::ContentType;
use mime::Mime;
use serde::Serialize;

use crate::client::error::AtomicError;

/// A pre-encoded request body.
///
/// Supplying a body to a call takes precedence over the payload serialization:
/// the bytes are sent verbatim with their own content type.
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) mime: Mime,
    #[debug(ignore)]
    pub(in crate::client) data: Bytes,
}

impl CallBody {
    /// A JSON body.
    ///
    /// # Errors
    ///
    /// Fails if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, AtomicError> {
        let data = serde_json::to_vec(value)?;
        Ok(Self {
            mime: mime::APPLICATION_JSON,
            data: data.into(),
        })
    }

    /// Raw bytes with an explicit content type.
    pub fn raw(data: impl Into<Bytes>, mime: Mime) -> Self {
        Self {
            mime,
            data: data.into(),
        }
    }

    /// A `multipart/form-data` body holding a single `file` part.
    ///
    /// The part declares its disposition, content type and length.
    ///
    /// # Errors
    ///
    /// Fails if `content_type` is not a valid media type.
    pub fn multipart_file(
        filename: &str,
        content_type: &str,
        data: impl AsRef<[u8]>,
    ) -> Result<Self, AtomicError> {
        let boundary = format!("----formdata-atomic-{}", uuid::Uuid::new_v4());
        Self::multipart_file_with_boundary(&boundary, filename, content_type, data.as_ref())
    }

    fn multipart_file_with_boundary(
        boundary: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<Self, AtomicError> {
        let part_type: Mime = content_type.parse()?;
        let filename = filename.replace('"', "\\\"");

        let mut body = BytesMut::with_capacity(data.len() + 256);
        body.put_slice(format!("--{boundary}\r\n").as_bytes());
        body.put_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.put_slice(format!("Content-Type: {part_type}\r\n").as_bytes());
        body.put_slice(format!("Content-Length: {}\r\n\r\n", data.len()).as_bytes());
        body.put_slice(data);
        body.put_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let mime = format!("multipart/form-data; boundary={boundary}").parse()?;
        Ok(Self {
            mime,
            data: body.freeze(),
        })
    }

    /// Returns `true` for `multipart/form-data` bodies.
    pub fn is_multipart(&self) -> bool {
        self.mime.type_() == mime::MULTIPART && self.mime.subtype() == mime::FORM_DATA
    }

    /// The body media type.
    pub fn content_type(&self) -> ContentType {
        ContentType::from(self.mime.clone())
    }

    /// The encoded bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Widget {
        name: String,
    }

    #[test]
    fn should_create_json_body() {
        let body = CallBody::json(&Widget {
            name: "x".to_string(),
        })
        .expect("should create body");

        assert_eq!(body.mime, mime::APPLICATION_JSON);
        assert_eq!(body.data.as_ref(), br#"{"name":"x"}"#);
        assert!(!body.is_multipart());
    }

    #[test]
    fn should_encode_single_file_part() {
        let body = CallBody::multipart_file_with_boundary(
            "XyZ",
            "avatar.png",
            "image/png",
            b"PNG!",
        )
        .expect("should create body");

        assert!(body.is_multipart());
        assert_eq!(body.mime.to_string(), "multipart/form-data; boundary=XyZ");
        let expected = concat!(
            "--XyZ\r\n",
            "Content-Disposition: form-data; name=\"file\"; filename=\"avatar.png\"\r\n",
            "Content-Type: image/png\r\n",
            "Content-Length: 4\r\n",
            "\r\n",
            "PNG!\r\n",
            "--XyZ--\r\n",
        );
        assert_eq!(body.data.as_ref(), expected.as_bytes());
    }

    #[test]
    fn should_use_random_boundary() {
        let first = CallBody::multipart_file("a.csv", "text/csv", b"a").expect("first");
        let second = CallBody::multipart_file("a.csv", "text/csv", b"a").expect("second");

        assert_ne!(first.mime.to_string(), second.mime.to_string());
        assert!(
            first
                .mime
                .to_string()
                .starts_with("multipart/form-data; boundary=----formdata-atomic-")
        );
    }

    #[test]
    fn should_escape_quotes_in_filename() {
        let body = CallBody::multipart_file_with_boundary("b", "a\"b.txt", "text/plain", b"")
            .expect("should create body");

        let text = String::from_utf8(body.data.to_vec()).expect("utf-8 body");
        assert!(text.contains(r#"filename="a\"b.txt""#));
    }

    #[test]
    fn should_reject_invalid_part_type() {
        let result = CallBody::multipart_file("a.bin", "not a mime", b"");

        assert!(matches!(result, Err(AtomicError::InvalidContentType(_))));
    }
}
