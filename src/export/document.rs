use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};
use xml::{
    EmitterConfig,
    common::XmlVersion,
    writer::{self, EventWriter, XmlEvent},
};

use crate::{
    error::{ExportError, export_error::ExportResult},
    export::dir::ensure_results_dir,
    sampler::SampleSet,
    task::{TaskName, artifact_path},
    util::num::{format_real, parse_real},
};

const ROOT: &str = "data";
const X_SERIES: &str = "xdata";
const X_ITEM: &str = "x";
const Y_SERIES: &str = "ydata";
const Y_ITEM: &str = "y";

/// Writes the data document of `samples` to `<dir>/<name>.xml`.
///
/// The results directory is created when missing and an existing document is
/// overwritten. The file handle is released on every exit path.
///
/// # Errors
/// - `ExportError::CreateDir` if the directory cannot be created.
/// - `ExportError::Io` if the file cannot be created or flushed.
/// - `ExportError::Xml` if the emitter fails.
pub fn save_xml(samples: &SampleSet, dir: &Path, name: &TaskName) -> ExportResult<PathBuf> {
    ensure_results_dir(dir)?;
    let path = artifact_path(dir, name, "xml");

    let file = File::create(&path).map_err(|source| ExportError::Io { path: path.clone(),
                                                                     source })?;
    let mut sink = write_document(samples, BufWriter::new(file)).map_err(|source| {
                                                                    ExportError::Xml { path: path.clone(),
                                                                                       source }
                                                                })?;
    sink.write_all(b"\n")
        .and_then(|()| sink.flush())
        .map_err(|source| ExportError::Io { path: path.clone(),
                                            source })?;

    info!(path = %path.display(), samples = samples.len(), "wrote data document");
    Ok(path)
}

/// Emits the data document of `samples` into `sink` and hands `sink` back.
///
/// The document is UTF-8 with an XML declaration and tab indentation:
///
/// ```text
/// <data>
///     <xdata>
///         <x>VALUE</x>
///     </xdata>
///     <ydata>
///         <y>VALUE</y>
///     </ydata>
/// </data>
/// ```
///
/// Values are formatted with [`format_real`].
///
/// # Errors
/// Returns the emitter's error, which includes I/O failures of `sink`.
///
/// # Example
/// ```
/// use funcplot::{export::document::write_document, sampler::SampleSet};
///
/// let samples = SampleSet::from_parts(vec![0.0, 1.0], vec![1.0, f64::INFINITY]).unwrap();
/// let bytes = write_document(&samples, Vec::new()).unwrap();
/// let text = String::from_utf8(bytes).unwrap();
///
/// assert!(text.contains("\t<xdata>\n\t\t<x>0.0</x>\n\t\t<x>1.0</x>\n\t</xdata>"));
/// assert!(text.contains("<y>inf</y>"));
/// ```
pub fn write_document<W: Write>(samples: &SampleSet, sink: W) -> Result<W, writer::Error> {
    let mut writer = EmitterConfig::new().perform_indent(true)
                                         .indent_string("\t")
                                         .create_writer(sink);

    writer.write(XmlEvent::StartDocument { version:    XmlVersion::Version10,
                                           encoding:   Some("utf-8"),
                                           standalone: None, })?;
    writer.write(XmlEvent::start_element(ROOT))?;
    write_series(&mut writer, X_SERIES, X_ITEM, samples.x_values())?;
    write_series(&mut writer, Y_SERIES, Y_ITEM, samples.y_values())?;
    writer.write(XmlEvent::end_element())?;

    Ok(writer.into_inner())
}

fn write_series<W: Write>(writer: &mut EventWriter<W>,
                          series: &str,
                          item: &str,
                          values: &[f64])
                          -> Result<(), writer::Error> {
    writer.write(XmlEvent::start_element(series))?;
    for &value in values {
        let text = format_real(value);
        writer.write(XmlEvent::start_element(item))?;
        writer.write(XmlEvent::characters(&text))?;
        writer.write(XmlEvent::end_element())?;
    }
    writer.write(XmlEvent::end_element())
}

/// Shape of a data document as read back by [`load_xml`].
#[derive(Debug, Deserialize)]
struct DataDocument {
    xdata: XData,
    ydata: YData,
}

#[derive(Debug, Deserialize)]
struct XData {
    #[serde(rename = "x", default)]
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct YData {
    #[serde(rename = "y", default)]
    values: Vec<String>,
}

/// Reads a data document written by [`save_xml`] back into a [`SampleSet`].
///
/// # Errors
/// - `ExportError::Io` if the file cannot be read.
/// - `ExportError::XmlRead` if the document does not have the expected shape.
/// - `ExportError::InvalidValue` if a value is not a real number.
/// - `ExportError::LengthMismatch` if `xdata` and `ydata` differ in length.
pub fn load_xml(path: &Path) -> ExportResult<SampleSet> {
    let text = fs::read_to_string(path).map_err(|source| ExportError::Io { path: path.to_path_buf(),
                                                                          source })?;
    let document: DataDocument =
        serde_xml_rs::from_str(&text).map_err(|source| ExportError::XmlRead { path: path.to_path_buf(),
                                                                              source })?;

    let x_values = parse_values(&document.xdata.values, path)?;
    let y_values = parse_values(&document.ydata.values, path)?;
    let (x_count, y_count) = (x_values.len(), y_values.len());

    debug!(path = %path.display(), samples = x_count, "read data document");
    SampleSet::from_parts(x_values, y_values).map_err(|_| ExportError::LengthMismatch { x_count,
                                                                                        y_count,
                                                                                        path: path.to_path_buf() })
}

fn parse_values(texts: &[String], path: &Path) -> ExportResult<Vec<f64>> {
    texts.iter()
         .map(|text| {
             parse_real(text).ok_or_else(|| ExportError::InvalidValue { value: text.clone(),
                                                                        path:  path.to_path_buf(), })
         })
         .collect()
}
