use crate::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in a CIGAR line
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Step<Len: PrimUInt = u64> {
    /// The alignment operation
    pub op: Op,
    /// The length of the run, e.g. the number of consequent letters or gaps
    pub len: Len,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Self {
        Self { op, len }
    }

    /// Merge neighbouring steps with identical operations and drop empty steps.
    /// If the sum of the lengths exceeds the maximum value of the step size, the step is split.
    pub fn optimize(steps: &mut Vec<Step<Len>>) {
        steps.retain(|x| x.len > Len::zero());
        if steps.len() <= 1 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);
        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_optimize() {
        let mut steps: Vec<Step> = vec![
            Step::new(Op::Match, 10),
            Step::new(Op::Match, 0),
            Step::new(Op::Match, 5),
            Step::new(Op::Deletion, 3),
            Step::new(Op::Deletion, 1),
            Step::new(Op::Match, 2),
        ];
        Step::optimize(&mut steps);
        assert_eq!(
            steps,
            vec![
                Step::new(Op::Match, 15),
                Step::new(Op::Deletion, 4),
                Step::new(Op::Match, 2),
            ]
        );

        let mut steps: Vec<Step> = vec![Step::new(Op::Deletion, 0)];
        Step::optimize(&mut steps);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_step_optimize_overflow() {
        let mut steps: Vec<Step<u8>> = vec![
            Step::new(Op::Match, 200),
            Step::new(Op::Match, 100),
            Step::new(Op::Deletion, 1),
        ];
        Step::optimize(&mut steps);
        assert_eq!(
            steps,
            vec![
                Step::new(Op::Match, 255),
                Step::new(Op::Match, 45),
                Step::new(Op::Deletion, 1),
            ]
        );
    }
}
