//! ASCII STL token scanner.

use mesh_types::Triangle;
use tracing::trace;

/// Lazy decoder over the `facet ... endfacet` blocks of an ASCII STL buffer.
///
/// The buffer is split on ASCII whitespace and matched against the grammar
///
/// ```text
/// facet normal <n> <n> <n> outer loop
///   vertex <x> <y> <z>  vertex <x> <y> <z>  vertex <x> <y> <z>
/// endloop endfacet
/// ```
///
/// Keywords are case-insensitive and numbers accept anything Rust's `f64`
/// parser does, including scientific notation such as `1.23e-4`. A block that
/// deviates from the grammar yields no triangle: scanning resumes at the next
/// `facet` keyword and the block is counted in [`skipped_blocks`].
///
/// [`skipped_blocks`]: AsciiTriangles::skipped_blocks
#[derive(Debug, Clone)]
pub struct AsciiTriangles<'a> {
    bytes: &'a [u8],
    pos: usize,
    skipped: usize,
}

impl<'a> AsciiTriangles<'a> {
    /// Create a scanner over the whole buffer.
    ///
    /// Scanning starts after the `solid` header line, so a solid name that
    /// happens to contain `facet` does not open a block. A single-line buffer
    /// only has the `solid` keyword skipped. Never fails; a buffer without
    /// any well-formed block simply yields nothing.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: header_len(bytes),
            skipped: 0,
        }
    }

    /// Number of `facet` blocks skipped so far because they were malformed.
    #[must_use]
    pub const fn skipped_blocks(&self) -> usize {
        self.skipped
    }

    /// The name following `solid` on the first line, if present.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_io::AsciiTriangles;
    ///
    /// let ascii = AsciiTriangles::new(b"solid  Bracket v2 \nfacet normal 0 0 1");
    /// assert_eq!(ascii.solid_name().as_deref(), Some("Bracket v2"));
    /// ```
    #[must_use]
    pub fn solid_name(&self) -> Option<String> {
        let text = self.bytes.trim_ascii_start();
        let first_line = text.split(|&b| b == b'\n').next()?;
        let keyword = first_line.get(..5)?;
        if !keyword.eq_ignore_ascii_case(b"solid") {
            return None;
        }

        let name = String::from_utf8_lossy(&first_line[5..]);
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Advance past whitespace and return the next token.
    fn next_token(&mut self) -> Option<&'a [u8]> {
        let rest = &self.bytes[self.pos..];
        let start = rest.iter().position(|b| !b.is_ascii_whitespace())?;
        let len = rest[start..]
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(rest.len() - start);

        self.pos += start + len;
        Some(&rest[start..start + len])
    }

    /// Move to the start of the next line, or the end of the buffer.
    fn skip_line(&mut self) {
        self.pos = self.bytes[self.pos..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |newline| self.pos + newline + 1);
    }

    fn expect_keyword(&mut self, keyword: &[u8]) -> Option<()> {
        self.next_token()
            .filter(|token| token.eq_ignore_ascii_case(keyword))
            .map(|_| ())
    }

    fn number(&mut self) -> Option<f64> {
        let token = self.next_token()?;
        std::str::from_utf8(token).ok()?.parse().ok()
    }

    fn coords(&mut self) -> Option<[f64; 3]> {
        Some([self.number()?, self.number()?, self.number()?])
    }

    fn vertex(&mut self) -> Option<[f64; 3]> {
        self.expect_keyword(b"vertex")?;
        self.coords()
    }

    /// Parse the remainder of a block whose `facet` keyword was just consumed.
    fn facet_body(&mut self) -> Option<Triangle> {
        self.expect_keyword(b"normal")?;
        // The stored normal is advisory; it must parse but is discarded.
        self.coords()?;
        self.expect_keyword(b"outer")?;
        self.expect_keyword(b"loop")?;
        let v0 = self.vertex()?;
        let v1 = self.vertex()?;
        let v2 = self.vertex()?;
        self.expect_keyword(b"endloop")?;
        self.expect_keyword(b"endfacet")?;
        Some(Triangle::from_arrays(v0, v1, v2))
    }
}

/// Bytes taken by the `solid` header line, or 0 if there is none.
fn header_len(bytes: &[u8]) -> usize {
    let start = bytes.len() - bytes.trim_ascii_start().len();
    let is_solid = bytes
        .get(start..start + 5)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case(b"solid"));
    if !is_solid {
        return 0;
    }

    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(start + 5, |newline| start + newline + 1)
}

impl Iterator for AsciiTriangles<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.next_token()?;
            if token.eq_ignore_ascii_case(b"endsolid") {
                self.skip_line();
                continue;
            }
            if !token.eq_ignore_ascii_case(b"facet") {
                continue;
            }

            let block_start = self.pos;
            if let Some(triangle) = self.facet_body() {
                return Some(triangle);
            }

            // Rewind so a `facet` inside the broken block is still found.
            trace!(offset = block_start, "Skipping malformed facet block");
            self.pos = block_start;
            self.skipped += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The shortest possible block ("facet normal 0 0 0 outer loop" etc.)
        // is well over 50 bytes.
        (0, Some((self.bytes.len() - self.pos) / 50 + 1))
    }
}
