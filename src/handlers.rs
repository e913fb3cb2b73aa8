//! The single route: GET renders the form, POST runs the generation
//! pipeline and streams back the .docx.

use actix_web::{web, HttpRequest, HttpResponse};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::completion::CompletionError;
use crate::document::render_docx;
use crate::models::FormInput;
use crate::prompt::build_prompt;
use crate::sanitize;
use crate::state::AppState;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Unreserved characters and `/` stay literal, everything else (including
/// the CJK filename bytes) gets percent-encoded for Content-Disposition.
const FILENAME_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Which terminal condition the re-rendered form should announce.
pub enum FormNotice {
    None,
    Incomplete,
    Busy,
    Timeout,
    Failed(String),
}

pub async fn index() -> HttpResponse {
    form_response(FormNotice::None)
}

pub async fn generate(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> HttpResponse {
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_bytes(body.as_ref()) {
        Ok(pairs) => pairs,
        Err(err) => {
            log::warn!("unparsable form body: {err}");
            return form_response(FormNotice::Incomplete);
        }
    };
    let input = FormInput::from_pairs(pairs);

    let client_id = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    log::info!(
        "generation request from {client_id}: title={:?} options={:?} word_count={:?} font_size={:?} line_height={:?}",
        input.title,
        input.options,
        input.word_count,
        input.font_size,
        input.line_height
    );

    if !input.is_complete() {
        return form_response(FormNotice::Incomplete);
    }

    let slot = match state.pending.try_enter(&client_id) {
        Some(slot) => slot,
        None => {
            log::info!("rejecting {client_id}: generation already in flight");
            return form_response(FormNotice::Busy);
        }
    };

    let prompt = build_prompt(&input.title, &input.options, &input.word_count);
    log::info!("prompt for {client_id}: {prompt}");

    let outcome = state.completion.complete(&prompt).await;
    drop(slot);

    let text = match outcome {
        Ok(text) => text,
        Err(err @ CompletionError::Timeout(_)) => {
            log::warn!("completion for {client_id} timed out: {err}");
            return form_response(FormNotice::Timeout);
        }
        Err(err) if state.embed_provider_errors => {
            log::error!("completion for {client_id} failed, embedding error text: {err}");
            format!("AI调用失败：{err}")
        }
        Err(err) => {
            log::error!("completion for {client_id} failed: {err}");
            return form_response(FormNotice::Failed(err.to_string()));
        }
    };

    let filtered = sanitize::restrict_charset(&text);
    let paragraphs = sanitize::clean(&filtered);

    let bytes = match render_docx(&paragraphs, input.font_size_pt(), input.line_spacing()) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("document rendering for {client_id} failed: {err}");
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("文档生成失败，请稍后再试。");
        }
    };

    let filename = download_filename(&input.title, chrono::Utc::now().timestamp());
    HttpResponse::Ok()
        .content_type(DOCX_MIME)
        .insert_header(("Content-Disposition", content_disposition(&filename)))
        .body(bytes)
}

/// `课文背景_{title}_{unix timestamp}.docx`, path separators replaced.
pub fn download_filename(title: &str, timestamp: i64) -> String {
    let safe_title = title.replace(['/', '\\'], "_");
    format!("课文背景_{safe_title}_{timestamp}.docx")
}

/// Both the plain and the RFC 5987 extended parameter carry the same
/// percent-encoded name, the way the original served its downloads.
pub fn content_disposition(filename: &str) -> String {
    let encoded = utf8_percent_encode(filename, FILENAME_ENCODE).to_string();
    format!("attachment; filename=\"{encoded}\"; filename*=UTF-8''{encoded}")
}

/// Font size choices offered by the form: 3.0 to 24.0 in half-point steps.
pub fn font_size_choices() -> Vec<f32> {
    (6..=48).map(|n| n as f32 / 2.0).collect()
}

pub fn render_form(notice: &FormNotice) -> String {
    let options_html: String = font_size_choices()
        .into_iter()
        .map(|size| {
            let selected = if size == 12.0 { " selected" } else { "" };
            format!("<option value=\"{size}\"{selected}>{size}</option>")
        })
        .collect();

    let notice_html = match notice {
        FormNotice::None => String::new(),
        FormNotice::Incomplete => {
            "<p class=\"notice error\">请填写完整的表单信息（标题、查询选项、字数、字号、行间距均为必填）。</p>".to_string()
        }
        FormNotice::Busy => {
            "<p class=\"notice\">您的上一个请求仍在生成中，请稍候再试。</p>".to_string()
        }
        FormNotice::Timeout => {
            "<p class=\"notice error\">生成超时，请稍后重试。</p>".to_string()
        }
        FormNotice::Failed(message) => format!(
            "<p class=\"notice error\">生成失败：{}</p>",
            escape_html(message)
        ),
    };

    INDEX_TEMPLATE
        .replace("{{font_size_options}}", &options_html)
        .replace("{{notice}}", &notice_html)
}

fn form_response(notice: FormNotice) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_form(&notice))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
