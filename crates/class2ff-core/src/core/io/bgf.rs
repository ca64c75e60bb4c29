use super::error::{GraphFileError, ParseErrorKind};
use super::traits::GraphFile;
use crate::core::models::graph::{ConnectivityGraph, GraphBuilder};
use std::collections::HashMap;
use std::io::BufRead;

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

/// BIOGRAF (`.bgf`) connectivity reader.
///
/// Atoms come from `ATOM`/`HETATM` records in file order (serial in columns 8-12,
/// force-field type in columns 62-66). Bonds come from `CONECT` records, which list
/// an atom serial followed by all of its bonded partners. `ORDER` records and
/// coordinates are ignored.
pub struct BgfFile;

impl GraphFile for BgfFile {
    type Error = GraphFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<ConnectivityGraph, Self::Error> {
        let mut builder = GraphBuilder::new();
        let mut index_by_serial: HashMap<usize, usize> = HashMap::new();
        let mut conect: Vec<(usize, Vec<usize>)> = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" | "HETATM" => {
                    let serial_str = slice_and_trim(&line, 7, 12);
                    let ff_type_str = slice_and_trim(&line, 61, 66);

                    let serial: usize = serial_str.parse().map_err(|_| GraphFileError::Parse {
                        line: line_num,
                        kind: ParseErrorKind::InvalidInt {
                            columns: "8-12".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    if ff_type_str.is_empty() {
                        return Err(GraphFileError::Parse {
                            line: line_num,
                            kind: ParseErrorKind::MissingRequiredField {
                                columns: "62-66".into(),
                            },
                        });
                    }
                    if index_by_serial.contains_key(&serial) {
                        return Err(GraphFileError::Parse {
                            line: line_num,
                            kind: ParseErrorKind::DuplicateSerial { serial },
                        });
                    }
                    let index = builder.add_atom(ff_type_str);
                    index_by_serial.insert(serial, index);
                }
                "CONECT" => {
                    let serials = line
                        .split_whitespace()
                        .skip(1)
                        .map(|token| {
                            token.parse::<usize>().map_err(|_| GraphFileError::Parse {
                                line: line_num,
                                kind: ParseErrorKind::InvalidConectSerial {
                                    value: token.into(),
                                },
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    if serials.len() >= 2 {
                        conect.push((line_num, serials));
                    }
                }
                "END" => break,
                _ => {}
            }
        }

        if index_by_serial.is_empty() {
            return Err(GraphFileError::MissingRecord("ATOM/HETATM records".into()));
        }

        // Bonds are added after all atoms so CONECT records may precede later atoms.
        for (line, serials) in conect {
            let lookup = |serial: usize| {
                index_by_serial
                    .get(&serial)
                    .copied()
                    .ok_or(GraphFileError::UnknownSerial { line, serial })
            };
            let origin = lookup(serials[0])?;
            for &partner in &serials[1..] {
                builder.add_bond(origin, lookup(partner)?)?;
            }
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::graph::GraphError;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn atom_line(serial: usize, name: &str, ff_type: &str) -> String {
        format!(
            "HETATM {:>5} {:<5} {:>3} {:1} {:>5}{:>10.5}{:>10.5}{:>10.5} {:<5}{:>3}{:>2} {:>8.5}",
            serial, name, "MOL", "A", 1, 0.0, 0.0, 0.0, ff_type, 1, 0, 0.0
        )
    }

    fn methanol_bgf() -> String {
        let mut lines = vec![
            "BIOGRF  200".to_string(),
            "DESCRP methanol".to_string(),
            "FORMAT ATOM   (a6,1x,i5,1x,a5,1x,a3,1x,a1,1x,a5,3f10.5,1x,a5,i3,i2,1x,f8.5)"
                .to_string(),
        ];
        for (serial, name, ff_type) in [
            (1, "C1", "c4o"),
            (2, "O1", "o2"),
            (3, "H1", "h1"),
            (4, "H2", "h1"),
            (5, "H3", "h1"),
            (6, "HO", "h1o"),
        ] {
            lines.push(atom_line(serial, name, ff_type));
        }
        lines.push("FORMAT CONECT (a6,12i6)".to_string());
        lines.push("CONECT     1     2     3     4     5".to_string());
        lines.push("CONECT     2     1     6".to_string());
        lines.push("CONECT     3     1".to_string());
        lines.push("ORDER      2     1     1".to_string());
        lines.push("END".to_string());
        lines.join("\n")
    }

    fn read(text: &str) -> Result<ConnectivityGraph, GraphFileError> {
        BgfFile::read_from(&mut Cursor::new(text))
    }

    #[test]
    fn atom_line_places_fields_in_fixed_columns() {
        let line = atom_line(12, "C1", "c4o");
        assert_eq!(&line[7..12], "   12");
        assert_eq!(slice_and_trim(&line, 61, 66), "c4o");
    }

    #[test]
    fn reads_types_and_conect_partners() {
        let graph = read(&methanol_bgf()).unwrap();
        assert_eq!(graph.len(), 6);
        assert_eq!(graph.bond_count(), 5);
        assert_eq!(graph.ff_type(0), "c4o");
        assert_eq!(graph.ff_type(5), "h1o");
        assert_eq!(graph.neighbors(0), &[1, 2, 3, 4]);
        assert_eq!(graph.neighbors(1), &[0, 5]);
    }

    #[test]
    fn serials_are_mapped_to_file_order() {
        let text = [
            atom_line(10, "O", "o2"),
            atom_line(20, "H", "h1"),
            "CONECT    20    10".to_string(),
        ]
        .join("\n");
        let graph = read(&text).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn records_after_end_are_ignored() {
        let text = format!("{}\nEND\n{}", atom_line(1, "C", "c4"), atom_line(2, "C", "c4"));
        assert_eq!(read(&text).unwrap().len(), 1);
    }

    #[test]
    fn missing_atom_records_is_an_error() {
        let result = read("BIOGRF  200\nEND\n");
        assert!(matches!(result, Err(GraphFileError::MissingRecord(_))));
    }

    #[test]
    fn invalid_serial_is_a_parse_error() {
        let mut line = atom_line(1, "C", "c4");
        line.replace_range(7..12, "  abc");
        let result = read(&line);
        assert!(matches!(
            result,
            Err(GraphFileError::Parse {
                line: 1,
                kind: ParseErrorKind::InvalidInt { .. }
            })
        ));
    }

    #[test]
    fn missing_force_field_type_is_a_parse_error() {
        let line = atom_line(1, "C", "");
        let result = read(&line);
        assert!(matches!(
            result,
            Err(GraphFileError::Parse {
                kind: ParseErrorKind::MissingRequiredField { .. },
                ..
            })
        ));
    }

    #[test]
    fn duplicate_serial_is_a_parse_error() {
        let text = [atom_line(1, "C", "c4"), atom_line(1, "H", "h1")].join("\n");
        let result = read(&text);
        assert!(matches!(
            result,
            Err(GraphFileError::Parse {
                line: 2,
                kind: ParseErrorKind::DuplicateSerial { serial: 1 }
            })
        ));
    }

    #[test]
    fn conect_to_unknown_serial_is_an_error() {
        let text = [atom_line(1, "C", "c4"), "CONECT     1     7".to_string()].join("\n");
        let result = read(&text);
        assert!(matches!(
            result,
            Err(GraphFileError::UnknownSerial { line: 2, serial: 7 })
        ));
    }

    #[test]
    fn conect_self_reference_is_a_graph_error() {
        let text = [atom_line(1, "C", "c4"), "CONECT     1     1".to_string()].join("\n");
        let result = read(&text);
        assert!(matches!(
            result,
            Err(GraphFileError::Graph(GraphError::SelfBond { atom: 0 }))
        ));
    }

    #[test]
    fn read_from_path_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("methanol.bgf");
        fs::write(&path, methanol_bgf()).unwrap();
        let graph = BgfFile::read_from_path(&path).unwrap();
        assert_eq!(graph.bond_count(), 5);
    }
}
