//! Task counting and report ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Department, Employee};

/// Number of tasks per employee id. Employees without tasks are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    counts: HashMap<String, usize>,
}

impl TaskCounts {
    /// Count of tasks assigned to `employee_id`, 0 when absent
    pub fn get(&self, employee_id: &str) -> usize {
        self.counts.get(employee_id).copied().unwrap_or(0)
    }

    /// Whether the id has at least one task
    pub fn contains(&self, employee_id: &str) -> bool {
        self.counts.contains_key(employee_id)
    }

    /// Number of distinct employees with tasks
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted tasks
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Count tasks per employee id.
///
/// Accumulation is commutative, so the order of `employee_ids` does not
/// affect the result.
pub fn count_tasks_by_employee<I>(employee_ids: I) -> TaskCounts
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for id in employee_ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    TaskCounts { counts }
}

/// An employee with their task count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEmployee {
    pub employee: Employee,
    pub task_count: usize,
}

/// A department with its total and ranked employees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub department: Department,
    /// Sum of task counts of the department's employees
    pub total: usize,
    /// Employees in descending task order
    pub employees: Vec<RankedEmployee>,
}

/// Fully joined, sorted and filtered structure ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedReport {
    /// Departments in descending total order
    pub departments: Vec<DepartmentSummary>,
}

impl RankedReport {
    /// Exact number of table rows: header, departments and their employees
    pub fn row_count(&self) -> usize {
        1 + self
            .departments
            .iter()
            .map(|d| 1 + d.employees.len())
            .sum::<usize>()
    }

    /// Row count of the allocation formula `departments + employees + 1`,
    /// which counts orphaned employees too.
    pub fn naive_row_count(departments: &[Department], employees: &[Employee]) -> usize {
        departments.len() + employees.len() + 1
    }

    /// Employees whose department id matches no department
    pub fn orphaned<'a>(employees: &'a [Employee], departments: &[Department]) -> Vec<&'a Employee> {
        employees
            .iter()
            .filter(|e| {
                !departments
                    .iter()
                    .any(|d| d.department_id == e.department_id)
            })
            .collect()
    }

    /// Total tasks across all departments
    pub fn total_tasks(&self) -> usize {
        self.departments.iter().map(|d| d.total).sum()
    }
}

/// Join departments, employees and task counts into a ranked report.
///
/// Both sorts are stable: departments with equal totals, and employees
/// with equal counts, keep their input order. Inputs are not modified.
pub fn rank_report(
    departments: &[Department],
    employees: &[Employee],
    task_counts: &TaskCounts,
) -> RankedReport {
    let mut summaries: Vec<DepartmentSummary> = departments
        .iter()
        .map(|department| {
            let mut members: Vec<RankedEmployee> = employees
                .iter()
                .filter(|e| e.department_id == department.department_id)
                .map(|e| RankedEmployee {
                    employee: e.clone(),
                    task_count: task_counts.get(&e.employee_id),
                })
                .collect();
            members.sort_by(|a, b| b.task_count.cmp(&a.task_count));

            DepartmentSummary {
                department: department.clone(),
                total: members.iter().map(|m| m.task_count).sum(),
                employees: members,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total.cmp(&a.total));

    RankedReport {
        departments: summaries,
    }
}
