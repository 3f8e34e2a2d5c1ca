use {
    crate::{decode, header::HEADER_LEN, Error, Header, Image, RecordError},
    std::io::{self, Read},
};

/// Counts above this only turn up when a little-endian file is read as big-endian.
pub const MAX_SPRITES: u32 = 65535;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub index: u32,
    pub header: Header,
    pub image: Image,
}

/// Lazily reads and decodes the sprites of one container, in file order.
///
/// Every item consumes exactly one record from the stream, so a record error
/// (bad dimensions, aspect, format or payload length) leaves the reader aligned
/// on the next record. Fatal errors end the iteration. In strict mode any error
/// ends it.
pub struct Sprites<R> {
    reader: R,
    count: u32,
    next: u32,
    strict: bool,
    done: bool,
}

impl<R: Read> Sprites<R> {
    /// Reads the sprite count; nothing else is read until iteration.
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let mut bytes = [0u8; 4];
        if fill(&mut reader, &mut bytes)? < bytes.len() {
            return Err(Error::TruncatedCount)
        }

        let count = u32::from_be_bytes(bytes);
        if count > MAX_SPRITES {
            return Err(Error::EndiannessMismatch(count))
        }

        Ok(Self{reader, count, next: 0, strict: false, done: false})
    }

    pub fn strict(self, strict: bool) -> Self {
        Self{strict, ..self}
    }

    pub fn sprite_count(&self) -> u32 {
        self.count
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Walks the headers alone, skipping payloads without decoding them.
    pub fn headers(self) -> Headers<R> {
        Headers(self)
    }

    /// Runs one record read, keeping the index and the stop conditions.
    fn advance<T>(&mut self, read: impl FnOnce(&mut Self, u32) -> Result<T, Error>)
        -> Option<Result<T, Error>>
    {
        if self.done || self.next >= self.count {return None}

        let index = self.next;
        self.next += 1;

        let result = read(self, index);
        if let Err(e) = &result {
            self.done = self.strict || e.is_fatal();
        }
        Some(result)
    }

    fn left(&self) -> (usize, Option<usize>) {
        let left = if self.done {0} else {(self.count - self.next) as usize};
        (left.min(1), Some(left))
    }

    fn read_header(&mut self, index: u32) -> Result<(Header, usize), Error> {
        let mut raw = [0u8; HEADER_LEN];
        if fill(&mut self.reader, &mut raw)? < HEADER_LEN {
            return Err(Error::TruncatedHeader{index})
        }

        let header = Header::from_bytes(raw);
        let wanted = usize::try_from(header.payload_len)
            .map_err(|_| Error::InvalidPayloadSize{index, size: header.payload_len})?;
        Ok((header, wanted))
    }

    fn read_sprite(&mut self, index: u32) -> Result<Sprite, Error> {
        let (header, wanted) = self.read_header(index)?;
        log::info!("{}", header.listing(index));
        let payload = self.read_payload(index, wanted)?;

        let record = |source: RecordError| Error::Record{index, source};
        let (wide, high) = header.validate().map_err(record)?;
        let image = decode(header.src_format, &payload, wide, high)
            .map_err(|e| record(e.into()))?;

        Ok(Sprite{index, header, image})
    }

    fn read_payload(&mut self, index: u32, wanted: usize) -> Result<Vec<u8>, Error> {
        // grows as bytes arrive, so a bogus length cannot force a huge allocation
        let mut payload = Vec::new();
        (&mut self.reader).take(wanted as u64).read_to_end(&mut payload)?;
        if payload.len() < wanted {
            return Err(Error::TruncatedPayload{index, wanted, got: payload.len()})
        }
        log::debug!("sprite {index}: read {wanted} payload bytes");
        Ok(payload)
    }

    fn skip_payload(&mut self, index: u32, wanted: usize) -> Result<(), Error> {
        let got = io::copy(&mut (&mut self.reader).take(wanted as u64), &mut io::sink())?;
        if got < wanted as u64 {
            return Err(Error::TruncatedPayload{index, wanted, got: got as usize})
        }
        Ok(())
    }
}

impl<R: Read> Iterator for Sprites<R> {
    type Item = Result<Sprite, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance(Self::read_sprite)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.left()
    }
}

/// Sprite headers in file order, payloads skipped. Nothing is validated, so
/// only stream errors (all fatal) come out.
pub struct Headers<R>(Sprites<R>);

impl<R: Read> Headers<R> {
    pub fn into_inner(self) -> R {
        self.0.into_inner()
    }
}

impl<R: Read> Iterator for Headers<R> {
    type Item = Result<(u32, Header), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.advance(|sprites, index| {
            let (header, wanted) = sprites.read_header(index)?;
            sprites.skip_payload(index, wanted)?;
            Ok((index, header))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.left()
    }
}

/// Reads until `buf` is full or the stream ends; returns the bytes read.
fn fill(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut got = 0;
    while got < buf.len() {
        match reader.read(&mut buf[got..]) {
            Ok(0) => break,
            Ok(n) => got += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(got)
}
