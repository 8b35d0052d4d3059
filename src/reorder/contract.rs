use std::collections::HashMap;

use crate::project::{Project, ReorderRequest};

use super::error::ReorderError;

/// Returns the input unchanged when ordering is trivially decided (0 or 1 projects).
pub fn trivial_order(request: &ReorderRequest) -> Option<Vec<Project>> {
    (request.projects.len() <= 1).then(|| request.projects.clone())
}

/// Checks that `output` holds exactly the projects of `input`, in any order.
///
/// Duplicates count: a list with one project twice is not a permutation of a
/// list holding it once.
pub fn ensure_permutation(input: &[Project], output: &[Project]) -> Result<(), ReorderError> {
    if input.len() != output.len() {
        return Err(ReorderError::ContractViolation {
            reason: format!("expected {} projects, got {}", input.len(), output.len()),
        });
    }

    let mut counts: HashMap<&Project, isize> = HashMap::with_capacity(input.len());
    for project in input {
        *counts.entry(project).or_insert(0) += 1;
    }

    for project in output {
        match counts.get_mut(project) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                return Err(ReorderError::ContractViolation {
                    reason: format!("unexpected or duplicated project '{}'", project.title),
                });
            }
        }
    }

    Ok(())
}
