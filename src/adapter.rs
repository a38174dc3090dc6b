#[cfg(feature = "noodles")]
pub mod fasta {
    use crate::{PopgenError, PopgenResult};
    pub use noodles::fasta as noodles_fasta;
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::path::Path;

    /// Read the body of every FASTA record from `reader`, in order.
    ///
    /// Record names and descriptions are dropped; bodies spanning several lines are joined.
    pub fn read_sequences<R: BufRead>(reader: R) -> PopgenResult<Vec<Vec<u8>>> {
        let mut reader = noodles_fasta::io::Reader::new(reader);

        let mut sequences = Vec::new();
        for record in reader.records() {
            let record = record.map_err(PopgenError::NoodlesFasta)?;
            let body: &[u8] = record.sequence().as_ref();
            sequences.push(body.to_vec());
        }

        Ok(sequences)
    }

    /// [`read_sequences`] from the file at `path`.
    ///
    /// # Errors
    /// - [`PopgenError::Io`] if the file can't be opened.
    /// - [`PopgenError::NoodlesFasta`] if its contents can't be read as FASTA.
    pub fn read_sequences_from_path<P: AsRef<Path>>(path: P) -> PopgenResult<Vec<Vec<u8>>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let sequences = read_sequences(BufReader::new(file))?;
        log::info!(
            "read {} sequences from {}",
            sequences.len(),
            path.display()
        );
        Ok(sequences)
    }

}
