//! Single non-redirecting GET over libcurl.

use std::io::Cursor;
use url::Url;

use super::address::ensure_http_scheme;
use crate::config::FetchConfig;
use crate::error::Error;

/// Status and body of one GET. A 3xx is returned as-is, never followed.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Line source over the buffered body.
    pub fn into_reader(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.body)
    }
}

fn transport(url: &Url) -> impl Fn(curl::Error) -> Error + '_ {
    move |source| Error::Transport {
        url: url.to_string(),
        source,
    }
}

fn easy_for(url: &Url, cfg: &FetchConfig) -> Result<curl::easy::Easy, Error> {
    ensure_http_scheme(url)?;
    if cfg.force_tls && url.scheme() != "https" {
        return Err(Error::InsecureScheme {
            url: url.to_string(),
        });
    }
    let mut easy = curl::easy::Easy::new();
    let err = transport(url);
    easy.url(url.as_str()).map_err(&err)?;
    easy.get(true).map_err(&err)?;
    easy.follow_location(false).map_err(&err)?;
    easy.connect_timeout(cfg.connect_timeout()).map_err(&err)?;
    easy.timeout(cfg.timeout()).map_err(&err)?;
    Ok(easy)
}

/// Performs a GET and buffers the body, up to `cfg.max_body_bytes`.
///
/// The easy handle is dropped on every return path, which closes the
/// connection and frees the partially-read body on transport errors.
pub fn get(url: &Url, cfg: &FetchConfig) -> Result<Response, Error> {
    let mut easy = easy_for(url, cfg)?;
    let err = transport(url);
    let limit = cfg.max_body_bytes;
    let mut body = Vec::new();
    let mut overflow = false;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                if (body.len() + data.len()) as u64 > limit {
                    overflow = true;
                    // Short count makes curl abort with a write error.
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(&err)?;
        transfer.perform()
    };
    if overflow {
        return Err(Error::BodyTooLarge {
            url: url.to_string(),
            limit,
        });
    }
    performed.map_err(&err)?;
    let status = easy.response_code().map_err(&err)?;
    tracing::debug!(url = %url, status, bytes = body.len(), "GET");
    Ok(Response { status, body })
}

/// Performs a GET and returns only the status code; the body is discarded.
pub fn status_of(url: &Url, cfg: &FetchConfig) -> Result<u32, Error> {
    let mut easy = easy_for(url, cfg)?;
    let err = transport(url);
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len())).map_err(&err)?;
        transfer.perform().map_err(&err)?;
    }
    let status = easy.response_code().map_err(&err)?;
    tracing::debug!(url = %url, status, "GET (status only)");
    Ok(status)
}
