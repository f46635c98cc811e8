//! Flat-text form of a [`ReadingSeries`]
//!
//! A serialized series is exactly two lines:
//!
//! ```text
//! <label>
//! <v0>,<v1>,...,<vN-1>
//! ```
//!
//! The label is written verbatim. Readings are written in their current order, separated by a
//! single comma, each in the shortest form that parses back to the same `f32`.
//! An empty series has an empty second line.

use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    error::{MalformedInputError, ResourceUnavailableError},
    series::{ReadingSeries, DEFAULT_CAPACITY},
};

/// Display adapter producing the serialized form
struct Text<'a>(&'a ReadingSeries);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.label())?;

        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }

            // Debug keeps the fractional part on whole numbers (`24.0`) and round-trips exactly
            write!(f, "{v:?}")?;
        }

        writeln!(f)
    }
}

impl ReadingSeries {
    /// Serializes the series into a new string
    pub fn to_text(&self) -> String {
        Text(self).to_string()
    }

    /// Serializes the series into `writer`
    ///
    /// Any error from the writer is returned unchanged.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", Text(self))
    }

    /// Writes the series to the file at `path`, replacing any existing contents
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ResourceUnavailableError> {
        let path = path.as_ref();
        let unavailable = |source| ResourceUnavailableError {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(unavailable)?);
        self.write_to(&mut writer).map_err(unavailable)?;
        writer.flush().map_err(unavailable)?;

        #[cfg(feature = "log")]
        log::debug!(
            "Saved {} readings for {:?} to {}",
            self.count(),
            self.label(),
            path.display()
        );

        Ok(())
    }

    /// Parses a serialized series
    ///
    /// Nothing is returned unless every reading parses.
    /// The value line may omit its final line break, so `"Lahti\n"` alone is an empty series.
    /// CRLF line breaks are accepted when both lines use them.
    pub fn from_text(input: &str) -> Result<Self, MalformedInputError> {
        let (label, rest) = input
            .split_once('\n')
            .ok_or(MalformedInputError::MissingLabelLine)?;

        let (line, crlf) = match rest.split_once('\n') {
            Some((line, "")) => match line.strip_suffix('\r') {
                Some(line) => (line, true),
                None => (line, false),
            },
            Some(_) => return Err(MalformedInputError::TrailingContent),
            // Value line without its final line break
            None => (rest, false),
        };

        let values = parse_values(line)?;

        // A label may itself end in `\r`, so only strip it from a CRLF file
        let label = if crlf {
            label.strip_suffix('\r').unwrap_or(label)
        } else {
            label
        };

        let mut series = Self::with_capacity(label, values.len() + DEFAULT_CAPACITY);
        series.extend(values);
        Ok(series)
    }

    /// Reads `reader` to the end and parses it as a serialized series
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, MalformedInputError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(MalformedInputError::Read)?;

        let input = String::from_utf8(bytes).map_err(|_| MalformedInputError::NotUtf8)?;
        Self::from_text(&input)
    }

    /// Loads a series previously written by [`Self::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MalformedInputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MalformedInputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let series = Self::read_from(BufReader::new(file))?;

        #[cfg(feature = "log")]
        log::debug!(
            "Loaded {} readings for {:?} from {}",
            series.count(),
            series.label(),
            path.display()
        );

        Ok(series)
    }
}

impl FromStr for ReadingSeries {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

fn parse_values(line: &str) -> Result<Vec<f32>, MalformedInputError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .enumerate()
        .map(|(i, token)| {
            token
                .trim()
                .parse::<f32>()
                .map_err(|source| MalformedInputError::InvalidValue {
                    position: i + 1,
                    token: token.to_owned(),
                    source,
                })
        })
        .collect()
}
