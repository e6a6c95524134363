//! Employee roster.
//!
//! A [`Roster`] is an immutable snapshot of the employee directory that
//! guarantees one employee per identity. Edits return a new roster.

use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

use super::Employee;

/// An ordered collection of employees with unique identities.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::models::{Employee, Roster};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let roster = Roster::new(vec![
///     Employee::new("emp-001", Decimal::new(470, 0), Some(today), today),
///     Employee::new("emp-002", Decimal::new(900, 0), Some(today), today).with_active(false),
/// ])
/// .unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.active().count(), 1);
/// assert!(roster.get("emp-003").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Builds a roster, rejecting repeated identities.
    pub fn new(employees: Vec<Employee>) -> EngineResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id()) {
                return Err(EngineError::DuplicateEmployee {
                    employee_id: employee.id().to_string(),
                });
            }
        }
        Ok(Self { employees })
    }

    /// All employees in directory order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Active employees in directory order.
    pub fn active(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.active)
    }

    /// Looks up an employee by identity.
    pub fn get(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id() == employee_id)
            .ok_or_else(|| EngineError::UnknownEmployee {
                employee_id: employee_id.to_string(),
            })
    }

    /// Number of employees, active or not.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns a roster with `employee` appended.
    pub fn with_employee(&self, employee: Employee) -> EngineResult<Self> {
        let mut employees = self.employees.clone();
        employees.push(employee);
        Self::new(employees)
    }

    /// Returns a roster with the employee of the same identity replaced.
    pub fn with_replaced(&self, employee: Employee) -> EngineResult<Self> {
        let position = self
            .employees
            .iter()
            .position(|e| e.id() == employee.id())
            .ok_or_else(|| EngineError::UnknownEmployee {
                employee_id: employee.id().to_string(),
            })?;

        let mut employees = self.employees.clone();
        employees[position] = employee;
        Ok(Self { employees })
    }

    /// Returns a roster without the given employee.
    pub fn without(&self, employee_id: &str) -> EngineResult<Self> {
        self.get(employee_id)?;
        Ok(Self {
            employees: self
                .employees
                .iter()
                .filter(|e| e.id() != employee_id)
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn employee(id: &str) -> Employee {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        Employee::new(id, Decimal::from(500), Some(today), today)
    }

    #[test]
    fn test_duplicate_identity_is_rejected() {
        let result = Roster::new(vec![employee("a"), employee("b"), employee("a")]);
        match result {
            Err(EngineError::DuplicateEmployee { employee_id }) => assert_eq!(employee_id, "a"),
            other => panic!("Expected DuplicateEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_active_preserves_directory_order() {
        let roster = Roster::new(vec![
            employee("c"),
            employee("a").with_active(false),
            employee("b"),
        ])
        .unwrap();

        let ids: Vec<&str> = roster.active().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn test_get_unknown_employee() {
        let roster = Roster::new(vec![employee("a")]).unwrap();
        assert!(matches!(
            roster.get("zz"),
            Err(EngineError::UnknownEmployee { employee_id }) if employee_id == "zz"
        ));
    }

    #[test]
    fn test_with_employee_rejects_duplicate() {
        let roster = Roster::new(vec![employee("a")]).unwrap();
        assert!(roster.with_employee(employee("a")).is_err());

        let grown = roster.with_employee(employee("b")).unwrap();
        assert_eq!(grown.len(), 2);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_with_replaced_keeps_position() {
        let roster = Roster::new(vec![employee("a"), employee("b")]).unwrap();
        let mut updated = employee("a");
        updated.base_salary = Decimal::from(999);

        let roster = roster.with_replaced(updated).unwrap();
        assert_eq!(roster.employees()[0].base_salary, Decimal::from(999));
        assert_eq!(roster.employees()[1].id(), "b");
    }

    #[test]
    fn test_with_replaced_unknown_employee() {
        let roster = Roster::new(vec![employee("a")]).unwrap();
        assert!(roster.with_replaced(employee("b")).is_err());
    }

    #[test]
    fn test_without_removes_employee() {
        let roster = Roster::new(vec![employee("a"), employee("b")]).unwrap();
        let roster = roster.without("a").unwrap();

        assert_eq!(roster.len(), 1);
        assert!(roster.get("a").is_err());
        assert!(roster.without("a").is_err());
    }
}
