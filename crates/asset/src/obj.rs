//! OBJ geometry parser: positions, texture coordinates, normals, faces and
//! the material-library reference.
//!
//! Faces must be pre-triangulated (exactly three corners); indices are
//! 1-based in the file and 0-based in the parsed model. Range checking
//! against the pools happens at assembly, not here, since the pools are
//! still growing while faces stream in.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ParseError;
use crate::mesh::{Classification, Corner, FaceRecord, Model};
use crate::mtl;

/// Parse a geometry file from disk. The file's own directory anchors
/// material and texture path resolution, not the working directory.
pub fn load_model_from_path(
    path: impl AsRef<Path>,
    classification: Classification,
) -> Result<Model, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    log::debug!("loading model {} as {:?}", path.display(), classification);
    load_model_from_reader(BufReader::new(file), &base_dir, classification)
}

/// Convenience wrapper for parsing an OBJ string literal. Material lookups
/// resolve against the working directory.
pub fn load_model_from_str(
    contents: &str,
    classification: Classification,
) -> Result<Model, ParseError> {
    load_model_from_reader(io::Cursor::new(contents), Path::new("."), classification)
}

/// Parse a geometry stream. All state lives in this call frame; parsing two
/// models in any order, or concurrently, cannot cross-contaminate them.
pub fn load_model_from_reader<R: BufRead>(
    reader: R,
    base_dir: &Path,
    classification: Classification,
) -> Result<Model, ParseError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut texcoords: Vec<[f32; 2]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut faces: Vec<FaceRecord> = Vec::new();
    let mut texture_path = PathBuf::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| ParseError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => {
                let x = parse_float(parts.next(), line_no, tag)?;
                let y = parse_float(parts.next(), line_no, tag)?;
                let z = parse_float(parts.next(), line_no, tag)?;
                positions.push([x, y, z]);
            }
            "vt" => {
                let u = parse_float(parts.next(), line_no, tag)?;
                let v = parse_float(parts.next(), line_no, tag)?;
                texcoords.push([u, v]);
            }
            "vn" => {
                let nx = parse_float(parts.next(), line_no, tag)?;
                let ny = parse_float(parts.next(), line_no, tag)?;
                let nz = parse_float(parts.next(), line_no, tag)?;
                normals.push([nx, ny, nz]);
            }
            "f" => {
                faces.push(parse_face(parts, line_no)?);
            }
            "mtllib" => {
                if let Some(name) = parts.next() {
                    if let Some(map) = mtl::first_diffuse_map(&base_dir.join(name)) {
                        texture_path = base_dir.join(map);
                    }
                }
            }
            _ => {
                // o/g/s/usemtl and anything newer: skip.
            }
        }
    }

    Ok(Model {
        positions,
        texcoords,
        normals,
        faces,
        texture_path,
        classification,
    })
}

fn parse_float(value: Option<&str>, line: usize, tag: &str) -> Result<f32, ParseError> {
    let token = value.ok_or_else(|| ParseError::MalformedLine {
        line,
        token: tag.to_string(),
    })?;
    token.parse::<f32>().map_err(|_| ParseError::MalformedLine {
        line,
        token: token.to_string(),
    })
}

fn parse_face<'a>(
    parts: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<FaceRecord, ParseError> {
    let corners: Vec<Corner> = parts
        .map(|token| parse_corner(token, line))
        .collect::<Result<_, _>>()?;
    let corners: [Corner; 3] = corners
        .try_into()
        .map_err(|_| ParseError::MalformedFace { line })?;
    Ok(FaceRecord { corners })
}

/// One corner token: `i`, `i/t`, `i//n` or `i/t/n`. Empty slash segments
/// leave the slot absent rather than pointing at pool entry 0.
fn parse_corner(token: &str, line: usize) -> Result<Corner, ParseError> {
    let mut segments = token.split('/');
    let position = parse_index(segments.next(), line)?
        .ok_or(ParseError::MalformedFace { line })?;
    let texture = parse_index(segments.next(), line)?;
    let normal = parse_index(segments.next(), line)?;
    if segments.next().is_some() {
        return Err(ParseError::MalformedFace { line });
    }
    Ok(Corner {
        position,
        texture,
        normal,
    })
}

/// 1-based positive index to 0-based, before any range validation.
fn parse_index(segment: Option<&str>, line: usize) -> Result<Option<usize>, ParseError> {
    match segment {
        None | Some("") => Ok(None),
        Some(text) => {
            let raw: usize = text
                .parse()
                .map_err(|_| ParseError::MalformedFace { line })?;
            if raw == 0 {
                return Err(ParseError::MalformedFace { line });
            }
            Ok(Some(raw - 1))
        }
    }
}
