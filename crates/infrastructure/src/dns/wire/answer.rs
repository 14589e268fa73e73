use super::header::{
    decode_answer_header, decode_header, validate_answer_header, validate_header,
    ANSWER_HEADER_LEN, HEADER_LEN,
};
use super::name::resolve_name;
use super::payload::{interpret, RecordData};
use super::view::PacketView;
use dns_export_domain::{AnswerRecord, DecodeError};
use tracing::trace;

/// Length of the type and class fields closing each question.
const QUESTION_FOOTER_LEN: usize = 4;

/// Decodes every answer of one response message, failing the whole message
/// on the first structural problem.
pub fn decode_answers(message: &[u8]) -> Result<Vec<AnswerRecord>, DecodeError> {
    let view = PacketView::new(message);
    if view.len() < HEADER_LEN {
        return Err(DecodeError::Truncated {
            offset: 0,
            needed: HEADER_LEN,
            available: view.len(),
        });
    }

    let header = decode_header(&view)?;
    validate_header(&header)?;

    let mut cursor = HEADER_LEN;
    for _ in 0..header.questions {
        cursor = skip_question(&view, cursor)?;
    }

    let mut records = Vec::with_capacity(usize::from(header.answers));
    for _ in 0..header.answers {
        let answer = decode_answer_header(&view, cursor)?;
        validate_answer_header(&answer)?;

        let domain = resolve_name(&view, usize::from(answer.name_offset))?.name;
        let data_offset = cursor + ANSWER_HEADER_LEN;
        let data = RecordData::new(&view, data_offset, usize::from(answer.data_len))?;
        let rendered = interpret(answer.record_type, &data)?;

        trace!(
            domain = %domain,
            record_type = answer.record_type,
            data_len = answer.data_len,
            "Decoded answer"
        );
        records.push(AnswerRecord::new(answer, domain, rendered));
        cursor = data_offset + usize::from(answer.data_len);
    }

    Ok(records)
}

/// Scans to the question name's terminating zero byte, then skips it and the
/// type/class footer.
fn skip_question(view: &PacketView<'_>, start: usize) -> Result<usize, DecodeError> {
    let mut cursor = start;
    while view.u8_at(cursor)? != 0 {
        cursor += 1;
    }
    let next = cursor + 1 + QUESTION_FOOTER_LEN;
    view.slice(cursor + 1, QUESTION_FOOTER_LEN)?;
    Ok(next)
}
