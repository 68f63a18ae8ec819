use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::bot::Bot;
use crate::commands::InboundMessage;

const LIVENESS_BODY: &str = "Taycan A. Schitt is alive!";
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Minimal sequential HTTP front. One connection is handled at a time, which
/// is exactly the execution model the pipeline wants: a webhook triggers the
/// whole blocking chain before the next request is read. The webhook route
/// answers 200 "ok" no matter what happened inside.
pub fn run(addr: &str, bot: &Bot) -> Result<()> {
    let listener =
        TcpListener::bind(addr).with_context(|| format!("failed to bind {addr}"))?;
    log::info!("listening on {addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_connection(stream, bot) {
                    log::warn!("connection error: {err:#}");
                }
            }
            Err(err) => log::warn!("accept failed: {err}"),
        }
    }
    Ok(())
}

fn handle_connection(stream: TcpStream, bot: &Bot) -> Result<()> {
    stream
        .set_read_timeout(Some(Duration::from_secs(10)))
        .context("set read timeout")?;
    stream
        .set_write_timeout(Some(Duration::from_secs(10)))
        .context("set write timeout")?;

    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .context("request line unreadable")?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line).context("header unreadable")?;
        if read == 0 || line.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length.min(MAX_BODY_BYTES)];
    if !body.is_empty() {
        reader.read_exact(&mut body).context("body unreadable")?;
    }
    let body = String::from_utf8_lossy(&body).into_owned();

    let (status, response) = match (method.as_str(), path.as_str()) {
        ("GET", "/") => ("200 OK", LIVENESS_BODY.to_string()),
        ("POST", "/webhook") => {
            match serde_json::from_str::<InboundMessage>(&body) {
                Ok(message) => bot.handle_webhook(&message),
                Err(err) => log::warn!("unparseable webhook payload: {err}"),
            }
            ("200 OK", "ok".to_string())
        }
        ("POST", "/tv") => {
            bot.manual_tv();
            ("200 OK", "ok".to_string())
        }
        _ => ("404 Not Found", "not found".to_string()),
    };

    let mut stream = reader.into_inner();
    write!(
        stream,
        "HTTP/1.1 {status}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response}",
        response.len(),
    )
    .context("response write failed")?;
    stream.flush().context("response flush failed")?;
    Ok(())
}
