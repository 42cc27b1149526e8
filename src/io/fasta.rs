use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// One FASTA record. `desc` is the free text after the identifier
/// (empty when absent); `seq` is upper-cased with line breaks removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: String,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    done: bool,
    peek_header: Option<Vec<u8>>,
}

/// Open `path` for reading; `-` is standard input.
pub fn open_source(path: &str) -> io::Result<FastaReader<Box<dyn BufRead>>> {
    let inner: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };
    Ok(FastaReader::new(inner))
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            done: false,
            peek_header: None,
        }
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        let n = self.reader.read_until(b'\n', &mut self.line)?;
        Ok(n > 0)
    }

    pub fn next_record(&mut self) -> io::Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Skip anything before the first header
        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                if !self.read_line()? {
                    self.done = true;
                    return Ok(None);
                }
                if self.line.first() == Some(&b'>') {
                    break self.line[1..].to_vec();
                }
            },
        };

        let header = String::from_utf8_lossy(&header);
        let header = header.trim();
        let (id, desc) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => (id.to_string(), rest.trim().to_string()),
            None => (header.to_string(), String::new()),
        };

        let mut seq = Vec::new();
        loop {
            if !self.read_line()? {
                self.done = true;
                break;
            }
            if self.line.first() == Some(&b'>') {
                self.peek_header = Some(self.line[1..].to_vec());
                break;
            }
            seq.extend(
                self.line
                    .iter()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(u8::to_ascii_uppercase),
            );
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = io::Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
