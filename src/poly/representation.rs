use std::io::{Error, ErrorKind, Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use bytes::{Buf, BufMut};

use super::polynomial::Polynomial;
use super::term::Term;

/// The number of bytes of a serialized term: literal, degree and coefficient.
const TERM_SIZE: usize = 4 + 4 + 8;

impl Polynomial {
    /// Write the polynomial to a binary stream. The format is the byte-length
    /// of the data first, followed by the number of terms and the terms.
    pub fn write<W: Write>(&self, mut dest: W) -> Result<(), Error> {
        let mut data = Vec::with_capacity(4 + self.nterms() * TERM_SIZE);

        data.put_u32_le(self.nterms() as u32);
        for t in self {
            data.put_u32_le(t.literal() as u32);
            data.put_i32_le(t.degree());
            data.put_f64_le(t.coefficient());
        }

        dest.write_u64::<LittleEndian>(data.len() as u64)?;
        dest.write_all(&data)
    }

    /// Read a polynomial from a binary stream written by [Polynomial::write].
    /// The terms are normalized on import.
    pub fn import<R: Read>(mut source: R) -> Result<Polynomial, Error> {
        let mut size_buf = [0; 8];
        source.read_exact(&mut size_buf)?;
        let n_size = u64::from_le_bytes(size_buf);

        if n_size < 4 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("Polynomial data too short: {} bytes", n_size),
            ));
        }

        let mut data = vec![];
        source.take(n_size).read_to_end(&mut data)?;
        if (data.len() as u64) < n_size {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                format!("Expected {} bytes, got {}", n_size, data.len()),
            ));
        }

        let mut source = &data[..];
        let nterms = source.get_u32_le() as usize;
        if source.remaining() != nterms * TERM_SIZE {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Size mismatch: {} terms in {} bytes",
                    nterms,
                    source.remaining()
                ),
            ));
        }

        let mut poly = Polynomial::new();
        for _ in 0..nterms {
            let code = source.get_u32_le();
            let literal = char::from_u32(code).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid literal: {:#x}", code),
                )
            })?;
            let degree = source.get_i32_le();
            let coefficient = source.get_f64_le();
            poly.add_term(Term::new(coefficient, literal, degree));
        }

        Ok(poly)
    }
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, ErrorKind};

    use crate::poly::{polynomial::Polynomial, term::Term};

    #[test]
    fn export_import() {
        let p = Polynomial::from_coefficients('t', &[2.5, 0., -1., 1e-300]);

        let mut export = vec![];
        p.write(&mut export).unwrap();
        assert_eq!(export.len(), 8 + 4 + 3 * 16);

        let q = Polynomial::import(Cursor::new(&export)).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn import_normalizes() {
        let mut data = vec![];
        data.extend(4u32.to_le_bytes());
        for (c, d) in [(1., 1), (2., 3), (-1., 1), (0., 0)] {
            data.extend(('x' as u32).to_le_bytes());
            data.extend((d as i32).to_le_bytes());
            data.extend((c as f64).to_le_bytes());
        }

        let mut export = (data.len() as u64).to_le_bytes().to_vec();
        export.extend(data);

        let p = Polynomial::import(Cursor::new(&export)).unwrap();
        assert_eq!(p.terms(), &[Term::new(2., 'x', 3)]);
    }

    #[test]
    fn corrupt_data() {
        let p = Polynomial::from_coefficients('x', &[1., 2.]);
        let mut export = vec![];
        p.write(&mut export).unwrap();

        let truncated = &export[..export.len() - 3];
        let e = Polynomial::import(Cursor::new(truncated)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnexpectedEof);

        let mut bad_count = export.clone();
        bad_count[8] = 7;
        let e = Polynomial::import(Cursor::new(&bad_count)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidData);

        let mut bad_literal = export;
        bad_literal[12..16].copy_from_slice(&0xD800u32.to_le_bytes());
        let e = Polynomial::import(Cursor::new(&bad_literal)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidData);
    }
}
