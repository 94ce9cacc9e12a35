use crate::{GutterError, upos_type};
use format_num_pattern::NumberFormat;
use std::cmp::max;
use unicode_width::UnicodeWidthStr;

/// The rendered labels, one per line.
///
/// Read-only except inside [Surface::edit].
#[derive(Debug, Clone)]
pub(crate) struct Surface {
    labels: Vec<String>,
    writable: bool,
}

impl Surface {
    /// Starts with the first line, which always exists.
    pub(crate) fn new(format: Option<&NumberFormat>) -> Self {
        Self {
            labels: vec![label(1, format)],
            writable: false,
        }
    }

    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    pub(crate) fn len(&self) -> upos_type {
        self.labels.len() as upos_type
    }

    #[cfg(test)]
    pub(crate) fn is_writable(&self) -> bool {
        self.writable
    }

    /// Widest label. Numbers only grow, so this looks at
    /// both ends.
    pub(crate) fn label_width(&self) -> u16 {
        let first = self.labels.first().map(|v| v.width() as u16);
        let last = self.labels.last().map(|v| v.width() as u16);
        max(first, last).unwrap_or_default()
    }

    /// Opens the surface for the closure and makes it
    /// read-only again afterwards, whatever the result.
    pub(crate) fn edit<R>(
        &mut self,
        f: impl FnOnce(&mut Surface) -> Result<R, GutterError>,
    ) -> Result<R, GutterError> {
        self.writable = true;
        let r = f(self);
        self.writable = false;
        r
    }

    /// Add labels until there are `count`.
    pub(crate) fn append_to(
        &mut self,
        count: upos_type,
        format: Option<&NumberFormat>,
    ) -> Result<(), GutterError> {
        if !self.writable {
            return Err(GutterError::ReadOnly);
        }
        for nr in self.len() + 1..=count {
            self.labels.push(label(nr, format));
        }
        Ok(())
    }

    /// Drop labels beyond `count`.
    pub(crate) fn truncate(&mut self, count: upos_type) -> Result<(), GutterError> {
        if !self.writable {
            return Err(GutterError::ReadOnly);
        }
        self.labels.truncate(count as usize);
        Ok(())
    }

    /// Relabel everything, e.g. after a format change.
    pub(crate) fn rebuild(
        &mut self,
        count: upos_type,
        format: Option<&NumberFormat>,
    ) -> Result<(), GutterError> {
        self.truncate(0)?;
        self.append_to(count, format)
    }
}

fn label(nr: upos_type, format: Option<&NumberFormat>) -> String {
    if let Some(format) = format {
        let mut tmp = String::new();
        _ = format.fmt_to(nr, &mut tmp);
        tmp
    } else {
        nr.to_string()
    }
}
