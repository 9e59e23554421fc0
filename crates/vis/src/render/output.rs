use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::render::OutputStream;

pub struct OutputFile {
    file: File,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<OutputFile> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<()> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}
