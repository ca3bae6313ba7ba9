//! Initial directory dataset

use crate::domain::{Employee, EmployeeId};

const SEED: [(u64, &str, &str, &str, &str, &str); 12] = [
    (1, "John", "Doe", "john.doe@ajackus.com", "Engineering", "Senior Developer"),
    (2, "Jane", "Smith", "jane.smith@ajackus.com", "Design", "UI/UX Designer"),
    (3, "Mike", "Johnson", "mike.johnson@ajackus.com", "Marketing", "Marketing Manager"),
    (4, "Sarah", "Williams", "sarah.williams@ajackus.com", "Engineering", "Frontend Developer"),
    (5, "David", "Brown", "david.brown@ajackus.com", "Sales", "Sales Representative"),
    (6, "Emily", "Davis", "emily.davis@ajackus.com", "HR", "HR Specialist"),
    (7, "Robert", "Wilson", "robert.wilson@ajackus.com", "Engineering", "Backend Developer"),
    (8, "Lisa", "Anderson", "lisa.anderson@ajackus.com", "Design", "Graphic Designer"),
    (9, "James", "Taylor", "james.taylor@ajackus.com", "Finance", "Financial Analyst"),
    (10, "Amanda", "Martinez", "amanda.martinez@ajackus.com", "Engineering", "QA Engineer"),
    (11, "Christopher", "Garcia", "christopher.garcia@ajackus.com", "Marketing", "Content Writer"),
    (12, "Jessica", "Rodriguez", "jessica.rodriguez@ajackus.com", "Sales", "Account Manager"),
];

/// The twelve records the directory starts with
pub fn seed_employees() -> Vec<Employee> {
    SEED.iter()
        .map(|&(id, first_name, last_name, email, department, role)| Employee {
            id: EmployeeId::new(id),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            role: role.to_string(),
        })
        .collect()
}
