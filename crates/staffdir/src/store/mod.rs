//! EmployeeStore - In-memory employee collection
//!
//! The store is the exclusive owner of every record. Reads hand out owned
//! copies, so nothing outside can reach the backing `Vec`.
//!
//! Invariants:
//! - ids are unique
//! - `next_id` is greater than every id this instance has ever issued or
//!   been seeded with, so deleted ids are never reused
//! - once `u64::MAX` has been issued there is no `next_id` and `create` fails

mod seed;

pub use seed::seed_employees;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{
    DomainError, Employee, EmployeeId, EmployeePatch, FilterCriteria, NewEmployee, SortField,
    SortOrder,
};

/// In-memory employee store
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    next_id: Option<EmployeeId>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Create an empty store; the first id issued is 1
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: Some(EmployeeId::new(1)),
        }
    }

    /// Create a store holding `employees`, continuing ids after the largest one.
    ///
    /// Fails with `Conflict` if two records share an id, or if the largest id
    /// is `u64::MAX` and no further id could be issued.
    pub fn with_employees(employees: Vec<Employee>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id) {
                return Err(DomainError::Conflict(format!(
                    "duplicate employee id {} in initial data",
                    employee.id
                )));
            }
        }

        let next_id = next_id_after(&employees);
        if next_id.is_none() {
            return Err(DomainError::Conflict(format!(
                "no employee id left after {} in initial data",
                u64::MAX
            )));
        }

        Ok(Self { employees, next_id })
    }

    /// Create a store holding the built-in twelve-record dataset
    pub fn seeded() -> Self {
        let employees = seed_employees();
        let next_id = next_id_after(&employees);
        Self { employees, next_id }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Id the next `create` will assign; `None` once the id space is used up
    pub fn next_id(&self) -> Option<EmployeeId> {
        self.next_id
    }

    /// Copies of every record, in insertion order
    pub fn list_all(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    pub fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    /// Append a new record with the next id
    pub fn create(&mut self, fields: NewEmployee) -> Result<Employee, DomainError> {
        let id = self
            .next_id
            .ok_or_else(|| DomainError::Repository("employee ids exhausted".to_string()))?;

        let employee = Employee::new(id, fields);
        self.next_id = id.next();
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Merge `patch` onto the record with `id`; `None` if there is no such record
    pub fn update(&mut self, id: EmployeeId, patch: EmployeePatch) -> Option<Employee> {
        let employee = self.employees.iter_mut().find(|e| e.id == id)?;
        employee.apply(patch);
        Some(employee.clone())
    }

    /// Remove the record with `id`, reporting whether one was removed
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        match self.employees.iter().position(|e| e.id == id) {
            Some(index) => {
                self.employees.remove(index);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on first name, last name or email.
    /// A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<Employee> {
        if query.trim().is_empty() {
            return self.list_all();
        }

        let needle = query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.first_name.to_lowercase().contains(&needle)
                    || e.last_name.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Records satisfying every active constraint in `criteria`
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| criteria.matches(e))
            .cloned()
            .collect()
    }

    /// Stable sort of `records` into a new vector; `records` is untouched.
    ///
    /// Text fields compare case-insensitively. Equal keys keep their input
    /// order in both directions.
    pub fn sort(records: &[Employee], field: SortField, order: SortOrder) -> Vec<Employee> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    /// Unique departments in first-seen order
    pub fn distinct_departments(&self) -> Vec<String> {
        distinct(self.employees.iter().map(|e| e.department.as_str()))
    }

    /// Unique roles in first-seen order
    pub fn distinct_roles(&self) -> Vec<String> {
        distinct(self.employees.iter().map(|e| e.role.as_str()))
    }
}

fn next_id_after(employees: &[Employee]) -> Option<EmployeeId> {
    match employees.iter().map(|e| e.id).max() {
        Some(max) => max.next(),
        None => Some(EmployeeId::new(1)),
    }
}

fn compare(a: &Employee, b: &Employee, field: SortField) -> Ordering {
    let text = |x: &str, y: &str| x.to_lowercase().cmp(&y.to_lowercase());
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::FirstName => text(&a.first_name, &b.first_name),
        SortField::LastName => text(&a.last_name, &b.last_name),
        SortField::Email => text(&a.email, &b.email),
        SortField::Department => text(&a.department, &b.department),
        SortField::Role => text(&a.role, &b.role),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
