use itch_wire::layout::LENGTH_PREFIX_LEN;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::decoder::{DecodeOutcome, ItchDecoder};
use crate::error::DecodeError;

/// One raw message read from a capture, borrowed from the decoder's
/// internal buffer.
///
/// `offset` is the position of the record's length prefix in the
/// capture, useful for pointing at a bad record with a hex editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureFrame<'a> {
  pub offset: u64,
  pub bytes: &'a [u8],
}

/// One decoded message from a capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureMessage {
  pub offset: u64,
  pub length: usize,
  pub outcome: DecodeOutcome,
}

/// Asynchronous decoder for capture files: a back-to-back sequence of
/// `[u16 BE length][message]` records, the same framing each multicast
/// datagram carries.
///
/// Records are read one at a time into a buffer that is reused across
/// calls, so memory stays bounded by the largest single message (64 KiB)
/// regardless of capture size.
///
/// ```text
///   [len][msg] [len][msg] [len][msg] ... EOF
///    ↑ offset of each CaptureFrame / CaptureMessage
/// ```
///
/// A clean EOF on a record boundary ends the stream. EOF anywhere inside
/// a record yields [`DecodeError::TruncatedStream`] once, and the stream
/// is then finished.
///
/// # Example
///
/// ```rust,no_run
/// use itch_decoder::StreamingDecoder;
/// use tokio::io::AsyncRead;
///
/// async fn count_records(reader: impl AsyncRead + Unpin) -> usize {
///     let mut stream = StreamingDecoder::new(reader);
///     let mut n = 0;
///     while let Some(Ok(msg)) = stream.next().await {
///         n += usize::from(msg.outcome.record().is_some());
///     }
///     n
/// }
/// ```
pub struct StreamingDecoder<R> {
  reader: R,
  buf: Vec<u8>,
  offset: u64,
  done: bool,
}

impl<R: AsyncRead + Unpin> StreamingDecoder<R> {
  #[must_use]
  pub fn new(reader: R) -> Self {
    Self {
      reader,
      buf: Vec::with_capacity(4096),
      offset: 0,
      done: false,
    }
  }

  /// Bytes consumed from the reader so far.
  pub fn position(&self) -> u64 {
    self.offset
  }

  /// Read the next record and decode it.
  pub async fn next(&mut self) -> Option<Result<CaptureMessage, DecodeError>> {
    let frame = match self.next_frame().await? {
      Ok(frame) => frame,
      Err(e) => return Some(Err(e)),
    };
    Some(Ok(CaptureMessage {
      offset: frame.offset,
      length: frame.bytes.len(),
      outcome: ItchDecoder::classify(frame.bytes),
    }))
  }

  /// Read the next record without decoding it.
  ///
  /// Returns `None` at a clean end of capture.
  pub async fn next_frame(&mut self) -> Option<Result<CaptureFrame<'_>, DecodeError>> {
    if self.done {
      return None;
    }

    let start = self.offset;

    let mut prefix = [0u8; LENGTH_PREFIX_LEN];
    let got = match read_up_to(&mut self.reader, &mut prefix).await {
      Ok(n) => n,
      Err(e) => return Some(self.fail(e.into())),
    };
    if got == 0 {
      self.done = true;
      return None;
    }
    if got < LENGTH_PREFIX_LEN {
      return Some(self.fail(DecodeError::TruncatedStream {
        offset: start,
        needed: LENGTH_PREFIX_LEN,
        available: got,
      }));
    }

    let declared = usize::from(u16::from_be_bytes(prefix));
    self.buf.clear();
    self.buf.resize(declared, 0);
    let got = match read_up_to(&mut self.reader, &mut self.buf).await {
      Ok(n) => n,
      Err(e) => return Some(self.fail(e.into())),
    };
    if got < declared {
      return Some(self.fail(DecodeError::TruncatedStream {
        offset: start,
        needed: declared,
        available: got,
      }));
    }

    self.offset = start + (LENGTH_PREFIX_LEN + declared) as u64;
    Some(Ok(CaptureFrame {
      offset: start,
      bytes: &self.buf,
    }))
  }

  fn fail<T>(&mut self, err: DecodeError) -> Result<T, DecodeError> {
    self.done = true;
    Err(err)
  }
}

/// Fill `buf` from `reader`, stopping early only at EOF.
///
/// Unlike `read_exact`, a short read is not an error: the caller gets the
/// count and decides whether EOF at this point is clean or a truncation.
async fn read_up_to<R: AsyncRead + Unpin>(
  reader: &mut R,
  buf: &mut [u8],
) -> std::io::Result<usize> {
  let mut filled = 0;
  while filled < buf.len() {
    let n = reader.read(&mut buf[filled..]).await?;
    if n == 0 {
      break;
    }
    filled += n;
  }
  Ok(filled)
}

#[cfg(test)]
mod tests {
  use super::*;
  use itch_encoder::ItchEncoder;
  use itch_types::{MessageType, Record};

  async fn collect(bytes: Vec<u8>) -> Vec<Result<CaptureMessage, DecodeError>> {
    let reader = tokio::io::BufReader::new(std::io::Cursor::new(bytes));
    let mut decoder = StreamingDecoder::new(reader);
    let mut out = Vec::new();
    while let Some(item) = decoder.next().await {
      out.push(item);
    }
    out
  }

  fn sample_capture() -> Vec<u8> {
    ItchEncoder::new()
      .add_system_event(0, b'O')
      .add_stock_directory("AAPL")
      .add_add_order(34_200_000_000_000, b'B', "AAPL")
      .add_raw(b"Zxyz")
      .encode_capture()
      .unwrap()
  }

  #[tokio::test]
  async fn streams_every_record_in_order() {
    let items = collect(sample_capture()).await;
    let types: Vec<MessageType> = items
      .into_iter()
      .map(|r| r.unwrap().outcome.into_record().unwrap().message_type())
      .collect();
    assert_eq!(
      types,
      vec![
        MessageType::SystemEvent,
        MessageType::StockDirectory,
        MessageType::AddOrder,
        MessageType::Unknown(b'Z'),
      ]
    );
  }

  #[tokio::test]
  async fn offsets_point_at_length_prefixes() {
    let items = collect(sample_capture()).await;
    let offsets: Vec<u64> = items.iter().map(|r| r.as_ref().unwrap().offset).collect();
    // 14 = 2 + 12 (S), 24 = 2 + 22 (L), 38 = 2 + 36 (A)
    assert_eq!(offsets, vec![0, 14, 38, 76]);
  }

  #[tokio::test]
  async fn matches_datagram_decoder() {
    let enc = {
      let mut e = ItchEncoder::new();
      e.add_trade(5, b'S', "MSFT").add_order_cancel(6).add_raw(b"D\0\0");
      e
    };
    let streamed: Vec<DecodeOutcome> = collect(enc.encode_capture().unwrap())
      .await
      .into_iter()
      .map(|r| r.unwrap().outcome)
      .collect();
    let per_datagram: Vec<DecodeOutcome> = enc
      .datagrams()
      .unwrap()
      .iter()
      .map(|dg| ItchDecoder::classify(&dg[2..]))
      .collect();
    assert_eq!(streamed, per_datagram);
    assert!(matches!(
      streamed[2],
      DecodeOutcome::Truncated { message_type: MessageType::DeleteOrder, length: 3, required: 19 }
    ));
  }

  #[tokio::test]
  async fn empty_capture_ends_immediately() {
    assert!(collect(Vec::new()).await.is_empty());
  }

  #[tokio::test]
  async fn truncated_body_is_reported_once() {
    let mut bytes = sample_capture();
    bytes.truncate(bytes.len() - 2);
    let items = collect(bytes).await;
    assert_eq!(items.len(), 4);
    assert!(items[..3].iter().all(Result::is_ok));
    assert!(matches!(
      items[3],
      Err(DecodeError::TruncatedStream { offset: 76, needed: 4, available: 2 })
    ));
  }

  #[tokio::test]
  async fn dangling_prefix_byte_is_truncation() {
    let mut bytes = sample_capture();
    bytes.push(0x00);
    let items = collect(bytes).await;
    assert!(matches!(
      items.last(),
      Some(Err(DecodeError::TruncatedStream { offset: 82, needed: 2, available: 1 }))
    ));
  }

  #[tokio::test]
  async fn zero_length_record_is_empty_outcome() {
    let items = collect(vec![0x00, 0x00]).await;
    assert_eq!(items.len(), 1);
    let msg = items.into_iter().next().unwrap().unwrap();
    assert_eq!(msg.outcome, DecodeOutcome::Empty);
    assert_eq!(msg.length, 0);
  }

  #[tokio::test]
  async fn next_frame_exposes_raw_bytes() {
    let capture = sample_capture();
    let mut decoder = StreamingDecoder::new(capture.as_slice());
    let frame = decoder.next_frame().await.unwrap().unwrap();
    assert_eq!(frame.bytes, &capture[2..14]);
    assert_eq!(decoder.position(), 14);

    let record = ItchDecoder::decode(&capture[2..14]).unwrap();
    assert!(matches!(record, Record::SystemEvent { .. }));
  }
}
