#![allow(dead_code)]

/// Offset of the first question name, the usual target of answer pointers.
pub const QUESTION_NAME_OFFSET: u16 = 12;

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0);
    bytes
}

pub fn pointer(offset: u16) -> Vec<u8> {
    (0xc000 | offset).to_be_bytes().to_vec()
}

/// Builds DNS response messages byte by byte.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    answer_count: Option<u16>,
    trailing: Vec<u8>,
}

impl ResponseBuilder {
    /// A standard NOERROR response with one `A IN` question for `name`.
    pub fn new(name: &str) -> Self {
        let mut question = encode_name(name);
        question.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        Self {
            id: 0x1234,
            flags: 0x8180,
            questions: vec![question],
            answers: Vec::new(),
            answer_count: None,
            trailing: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, record_type: u16) -> Self {
        let mut question = encode_name(name);
        question.extend_from_slice(&record_type.to_be_bytes());
        question.extend_from_slice(&1u16.to_be_bytes());
        self.questions.push(question);
        self
    }

    /// Overrides the answer count written into the header.
    pub fn answer_count(mut self, count: u16) -> Self {
        self.answer_count = Some(count);
        self
    }

    /// Appends a raw answer with a compressed owner name.
    pub fn raw_answer(
        mut self,
        owner_offset: u16,
        record_type: u16,
        class: u16,
        data_len: u16,
        rdata: &[u8],
    ) -> Self {
        let mut answer = pointer(owner_offset);
        answer.extend_from_slice(&record_type.to_be_bytes());
        answer.extend_from_slice(&class.to_be_bytes());
        answer.extend_from_slice(&300u32.to_be_bytes());
        answer.extend_from_slice(&data_len.to_be_bytes());
        answer.extend_from_slice(rdata);
        self.answers.push(answer);
        self
    }

    /// Appends an `IN` answer owned by the first question name.
    pub fn answer(self, record_type: u16, rdata: &[u8]) -> Self {
        self.raw_answer(
            QUESTION_NAME_OFFSET,
            record_type,
            1,
            rdata.len() as u16,
            rdata,
        )
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    /// Offset the next appended answer will start at.
    pub fn next_answer_offset(&self) -> usize {
        12 + self.questions.iter().map(Vec::len).sum::<usize>()
            + self.answers.iter().map(Vec::len).sum::<usize>()
    }

    pub fn build(&self) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice(&self.id.to_be_bytes());
        message.extend_from_slice(&self.flags.to_be_bytes());
        message.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        let answers = self.answer_count.unwrap_or(self.answers.len() as u16);
        message.extend_from_slice(&answers.to_be_bytes());
        message.extend_from_slice(&[0, 0, 0, 0]);
        for question in &self.questions {
            message.extend_from_slice(question);
        }
        for answer in &self.answers {
            message.extend_from_slice(answer);
        }
        message.extend_from_slice(&self.trailing);
        message
    }
}

/// Ethernet II / IPv4 / UDP frame around `payload`.
pub fn udp_frame(src_port: u16, dst_port: u16, payload: &[u8]) -> Vec<u8> {
    let udp_len = (8 + payload.len()) as u16;
    let ip_len = 20 + udp_len;

    let mut frame = vec![0x00, 0x11, 0x22, 0x33, 0x44, 0x66];
    frame.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    frame.extend_from_slice(&[0x08, 0x00]);

    frame.extend_from_slice(&[0x45, 0x00]);
    frame.extend_from_slice(&ip_len.to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00, 0x40, 0x00, 64, 17, 0x00, 0x00]);
    frame.extend_from_slice(&[192, 0, 2, 53]);
    frame.extend_from_slice(&[192, 0, 2, 10]);

    frame.extend_from_slice(&src_port.to_be_bytes());
    frame.extend_from_slice(&dst_port.to_be_bytes());
    frame.extend_from_slice(&udp_len.to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00]);
    frame.extend_from_slice(payload);
    frame
}

/// Little-endian microsecond pcap file.
pub fn legacy_pcap(link_type: u32, frames: &[Vec<u8>]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0xd4, 0xc3, 0xb2, 0xa1]);
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&0i32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&65535u32.to_le_bytes());
    data.extend_from_slice(&link_type.to_le_bytes());

    for (i, frame) in frames.iter().enumerate() {
        data.extend_from_slice(&(1_000_000_000u32 + i as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        data.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        data.extend_from_slice(frame);
    }
    data
}

/// Little-endian pcapng file with one interface.
pub fn pcapng(link_type: u16, frames: &[Vec<u8>]) -> Vec<u8> {
    let mut data = Vec::new();

    // section header
    data.extend_from_slice(&0x0a0d_0d0au32.to_le_bytes());
    data.extend_from_slice(&28u32.to_le_bytes());
    data.extend_from_slice(&0x1a2b_3c4du32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&(-1i64).to_le_bytes());
    data.extend_from_slice(&28u32.to_le_bytes());

    // interface description
    data.extend_from_slice(&1u32.to_le_bytes());
    data.extend_from_slice(&20u32.to_le_bytes());
    data.extend_from_slice(&link_type.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&65535u32.to_le_bytes());
    data.extend_from_slice(&20u32.to_le_bytes());

    for frame in frames {
        let padded = frame.len().div_ceil(4) * 4;
        let total = (32 + padded) as u32;
        data.extend_from_slice(&6u32.to_le_bytes());
        data.extend_from_slice(&total.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        data.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        data.extend_from_slice(frame);
        data.extend(std::iter::repeat(0u8).take(padded - frame.len()));
        data.extend_from_slice(&total.to_le_bytes());
    }
    data
}
