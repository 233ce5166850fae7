//! Reading formulas in the DIMACS format.
//!
//! The reader follows the conventions of SATLIB:
//! - Lines beginning with `c` are comments, and may appear anywhere.
//! - The first line which is not a comment is the problem specification `p cnf <atoms> <clauses>`.
//! - Literals are separated by whitespace, and each clause is ended by `0`. A clause may span multiple lines.
//! - A line beginning with `%` ends the formula, and anything after is ignored.
//!
//! ```rust
//! # use trisat::builder::dimacs::read_dimacs;
//! let dimacs = b"
//! c An example
//! p cnf 3 3
//!  1  2  3 0
//! -1  2 -3 0
//!  1 -2
//!     3 0
//! %
//! 0
//! ";
//!
//! let formula = read_dimacs(dimacs.as_slice()).unwrap();
//! assert_eq!(formula.atom_count(), 3);
//! assert_eq!(formula.clauses()[2], vec![1, -2, 3]);
//! ```

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, clause::CClause, formula::Formula, literal::CLiteral},
    types::err::{self},
};

/// Reads a formula in the DIMACS format.
///
/// Repeated literals within a clause are kept once.
/// A difference between the count of clauses specified and the count of clauses read is noted in the log, but otherwise ignored.
pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: CClause = Vec::default();
    let mut clauses: Vec<CClause> = Vec::default();

    let mut line_counter = 0;

    // first phase, read until the problem specification
    let (atom_count, clause_count) = loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => {
                log::error!(target: targets::PARSE, "No problem specification");
                return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
            }
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        match buffer.trim_start().chars().next() {
            None | Some('c') => continue,
            Some('p') => break problem_specification(&buffer)?,
            Some(_) => {
                log::error!(target: targets::PARSE, "Line {line_counter} precedes the problem specification");
                return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
            }
        }
    };

    log::debug!(target: targets::PARSE, "Expecting {clause_count} clauses over {atom_count} atoms");

    // second phase, read until the formula ends
    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        let line = buffer.trim_start();
        match line.chars().next() {
            Some('%') => break 'formula_loop,
            None | Some('c') => {}
            Some(_) => {
                for item in line.split_whitespace() {
                    match item.parse::<CLiteral>() {
                        Ok(0) => clauses.push(std::mem::take(&mut clause_buffer)),

                        Ok(literal) => {
                            if !clause_buffer.contains(&literal) {
                                clause_buffer.push(literal);
                            }
                        }

                        Err(_) => {
                            log::error!(target: targets::PARSE, "Failed to read '{item}' on line {line_counter}");
                            return Err(err::ErrorKind::from(err::ParseError::Line(line_counter)));
                        }
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        log::warn!(target: targets::PARSE, "Final clause without a terminating 0");
        clauses.push(clause_buffer);
    }

    if clauses.len() != clause_count {
        log::warn!(target: targets::PARSE, "Expected {clause_count} clauses, read {}", clauses.len());
    }

    let formula = Formula::new(atom_count, clauses)?;
    log::info!(target: targets::PARSE, "Read {} clauses over {} atoms", formula.clause_count(), formula.atom_count());
    Ok(formula)
}

/// The count of atoms and count of clauses from a problem specification.
fn problem_specification(line: &str) -> Result<(Atom, usize), err::ParseError> {
    let mut details = line.split_whitespace();

    match (details.next(), details.next(), details.next(), details.next()) {
        (Some("p"), Some("cnf"), Some(atoms), Some(clauses)) => {
            let atom_count = atoms.parse::<Atom>().map_err(|_| err::ParseError::ProblemSpecification)?;
            let clause_count = clauses.parse::<usize>().map_err(|_| err::ParseError::ProblemSpecification)?;
            Ok((atom_count, clause_count))
        }

        _ => {
            log::error!(target: targets::PARSE, "Malformed problem specification: {}", line.trim_end());
            Err(err::ParseError::ProblemSpecification)
        }
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;

    #[test]
    fn comments_anywhere() {
        let dimacs = b"c first
c second
p cnf 2 2
c between
1 -2 0
c within
-1 2 0
";
        let formula = read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(formula.clauses(), &[vec![1, -2], vec![-1, 2]]);
    }

    #[test]
    fn percent_ends_formula() {
        let dimacs = b"p cnf 3 1
1 2 3 0
%
0
";
        let formula = read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn repeated_literals() {
        let dimacs = b"p cnf 2 1\n1 1 -2 1 0\n";
        let formula = read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(formula.clauses(), &[vec![1, -2]]);
    }

    #[test]
    fn unterminated_final_clause() {
        let dimacs = b"p cnf 2 2\n1 2 0\n-1 -2";
        let formula = read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(formula.clauses(), &[vec![1, 2], vec![-1, -2]]);
    }

    #[test]
    fn count_mismatch_is_not_an_error() {
        let dimacs = b"p cnf 2 5\n1 2 0\n";
        assert!(read_dimacs(dimacs.as_slice()).is_ok());
    }

    #[test]
    fn problem_specification_errors() {
        let missing = b"c only a comment\n";
        assert_eq!(
            read_dimacs(missing.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );

        let early = b"1 2 0\np cnf 2 1\n";
        assert_eq!(
            read_dimacs(early.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );

        let malformed = b"p cnf two 1\n1 2 0\n";
        assert_eq!(
            read_dimacs(malformed.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );

        let not_cnf = b"p dnf 2 1\n1 2 0\n";
        assert!(read_dimacs(not_cnf.as_slice()).is_err());
    }

    #[test]
    fn unreadable_literal_line() {
        let dimacs = b"p cnf 2 2\n1 2 0\n1 x 0\n";
        assert_eq!(
            read_dimacs(dimacs.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::Line(3)))
        );
    }

    #[test]
    fn literal_out_of_range() {
        let dimacs = b"p cnf 2 1\n1 -3 0\n";
        assert_eq!(
            read_dimacs(dimacs.as_slice()),
            Err(err::ErrorKind::Formula(err::FormulaError::AtomOutOfRange {
                clause: 0,
                literal: -3
            }))
        );
    }
}
