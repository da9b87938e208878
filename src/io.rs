use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

fn is_gz(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open the input FASTQ; `-` means stdin, `.gz` is decompressed.
pub fn open_reader(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::with_capacity(2 << 20, io::stdin())));
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open input FASTQ {}", path.display()))?;

    if is_gz(path) {
        let decoder = MultiGzDecoder::new(file);
        // 2MB 缓冲区
        Ok(Box::new(BufReader::with_capacity(2 << 20, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(2 << 20, file)))
    }
}

/// Reader that appends a final `\n` when the wrapped stream ends without one.
///
/// The FASTQ parser treats a missing newline on the last quality line as a
/// truncated file. Empty input stays empty.
pub struct NewlineTerminated<R> {
    inner: R,
    last: Option<u8>,
    done: bool,
}

impl<R: Read> NewlineTerminated<R> {
    pub fn new(inner: R) -> Self {
        NewlineTerminated { inner, last: None, done: false }
    }
}

impl<R: Read> Read for NewlineTerminated<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.done || buf.is_empty() {
            return Ok(0);
        }
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.last = Some(buf[n - 1]);
            return Ok(n);
        }
        self.done = true;
        match self.last {
            Some(b) if b != b'\n' => {
                buf[0] = b'\n';
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// Output sink; stdout when no path is given, gzip for `.gz`.
pub fn create_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::with_capacity(4 << 20, io::stdout())));
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create output {}", path.display()))?;

    if is_gz(path) {
        // 低压缩等级换速度
        let encoder = GzEncoder::new(file, Compression::new(1));
        Ok(Box::new(BufWriter::with_capacity(4 << 20, encoder)))
    } else {
        Ok(Box::new(BufWriter::with_capacity(4 << 20, file)))
    }
}
