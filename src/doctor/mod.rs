//! Doctor command for self-diagnostics
//!
//! Health checks for the knowledge base, report output path, and
//! configuration file.

use colored::*;
use std::path::PathBuf;

use crate::config::Config;
use crate::kb::KnowledgeBase;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

/// Doctor diagnostics system
pub struct Doctor {
    kb: KnowledgeBase,
    report_path: PathBuf,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(kb: KnowledgeBase, report_path: PathBuf) -> Self {
        Self { kb, report_path }
    }

    /// Run all health checks
    pub fn run_diagnostics(&self) -> Vec<HealthCheck> {
        let mut checks = Vec::new();

        checks.push(self.check_knowledge_base());
        checks.push(self.check_question_bank());
        checks.push(self.check_symptom_coverage());
        checks.push(self.check_red_flags());
        checks.push(self.check_report_path());
        checks.push(self.check_config_file());

        checks
    }

    /// Check 1: Knowledge base cross-references
    fn check_knowledge_base(&self) -> HealthCheck {
        let issues = self.kb.validate();
        let status = if issues.is_empty() {
            HealthStatus::Pass
        } else {
            let summary: Vec<String> = issues.iter().take(3).map(|i| i.to_string()).collect();
            HealthStatus::Fail(format!(
                "{} issue(s): {}",
                issues.len(),
                summary.join("; ")
            ))
        };

        HealthCheck {
            name: "Knowledge Base".to_string(),
            status,
        }
    }

    /// Check 2: Question bank shape
    fn check_question_bank(&self) -> HealthCheck {
        let status = if self.kb.symptoms.is_empty() {
            HealthStatus::Fail("No questions defined".to_string())
        } else if self.kb.conditions.is_empty() {
            HealthStatus::Fail("No condition rules defined".to_string())
        } else {
            HealthStatus::Pass
        };

        HealthCheck {
            name: "Question Bank".to_string(),
            status,
        }
    }

    /// Check 3: Symptoms asked but never used
    fn check_symptom_coverage(&self) -> HealthCheck {
        let orphans = self.kb.orphan_symptoms();
        let status = if orphans.is_empty() {
            HealthStatus::Pass
        } else {
            let keys: Vec<&str> = orphans.iter().map(|s| s.key.as_str()).collect();
            HealthStatus::Warn(format!("Unused by any rule: {}", keys.join(", ")))
        };

        HealthCheck {
            name: "Symptom Coverage".to_string(),
            status,
        }
    }

    /// Check 4: Red-flag triggers present
    fn check_red_flags(&self) -> HealthCheck {
        let status = if self.kb.red_flags.is_empty() {
            HealthStatus::Warn("No red-flag triggers defined".to_string())
        } else {
            HealthStatus::Pass
        };

        HealthCheck {
            name: "Red Flags".to_string(),
            status,
        }
    }

    /// Check 5: Report path writable
    ///
    /// Tests write permission by creating and removing a scratch file
    /// in the report's directory.
    fn check_report_path(&self) -> HealthCheck {
        let dir = match self.report_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !dir.exists() {
            return HealthCheck {
                name: "Report Path".to_string(),
                status: HealthStatus::Fail(format!(
                    "Report directory {} does not exist",
                    dir.display()
                )),
            };
        }

        let test_file = dir.join(".symptombuddy_test");
        match std::fs::write(&test_file, "test") {
            Ok(_) => {
                let _ = std::fs::remove_file(&test_file);
                HealthCheck {
                    name: "Report Path".to_string(),
                    status: HealthStatus::Pass,
                }
            }
            Err(_) => HealthCheck {
                name: "Report Path".to_string(),
                status: HealthStatus::Fail("No write permission in report directory".to_string()),
            },
        }
    }

    /// Check 6: Config file parses
    fn check_config_file(&self) -> HealthCheck {
        let status = match Config::config_path() {
            Ok(path) if path.exists() => match Config::load_from(&path) {
                Ok(_) => HealthStatus::Pass,
                Err(e) => HealthStatus::Fail(format!("Config does not parse: {}", e)),
            },
            Ok(_) => HealthStatus::Warn("No config file; defaults in use".to_string()),
            Err(e) => HealthStatus::Warn(format!("Cannot locate config: {}", e)),
        };

        HealthCheck {
            name: "Config File".to_string(),
            status,
        }
    }

    /// Display diagnostics results
    pub fn display_results(checks: &[HealthCheck]) {
        println!("\n{}\n", "SymptomBuddy Self-Diagnostics".bold().cyan());
        println!("{:<20} {}", "Check", "Status");
        println!("{}", "=".repeat(50).cyan());

        for check in checks {
            let status = match &check.status {
                HealthStatus::Pass => "PASS".green().to_string(),
                HealthStatus::Warn(msg) => format!("{} {}", "WARN:".yellow().bold(), msg),
                HealthStatus::Fail(msg) => format!("{} {}", "FAIL:".red().bold(), msg),
            };

            println!("{:<20} {}", check.name, status);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks
            .iter()
            .any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::SymptomWeight;
    use std::path::Path;
    use tempfile::TempDir;

    fn doctor_in(dir: &Path) -> Doctor {
        Doctor::new(KnowledgeBase::builtin(), dir.join("diagnosis_report.txt"))
    }

    #[test]
    fn test_health_status_equality() {
        assert_eq!(HealthStatus::Pass, HealthStatus::Pass);
        assert_eq!(
            HealthStatus::Warn("test".to_string()),
            HealthStatus::Warn("test".to_string())
        );
        assert_eq!(
            HealthStatus::Fail("test".to_string()),
            HealthStatus::Fail("test".to_string())
        );
    }

    #[test]
    fn test_knowledge_base_check_passes_on_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let doctor = doctor_in(temp_dir.path());
        let check = doctor.check_knowledge_base();
        assert_eq!(check.status, HealthStatus::Pass);
    }

    #[test]
    fn test_knowledge_base_check_fails_on_broken_data() {
        let temp_dir = TempDir::new().unwrap();
        let mut kb = KnowledgeBase::builtin();
        kb.conditions[0].weights.push(SymptomWeight {
            key: "made_up".to_string(),
            weight: 1.0,
        });
        let doctor = Doctor::new(kb, temp_dir.path().join("report.txt"));
        let check = doctor.check_knowledge_base();
        assert!(matches!(check.status, HealthStatus::Fail(_)));
    }

    #[test]
    fn test_symptom_coverage_warns_on_unused_question() {
        let temp_dir = TempDir::new().unwrap();
        let doctor = doctor_in(temp_dir.path());
        let check = doctor.check_symptom_coverage();
        match check.status {
            HealthStatus::Warn(msg) => assert!(msg.contains("chronic_condition")),
            other => panic!("expected warn, got {:?}", other),
        }
    }

    #[test]
    fn test_red_flags_check_passes_on_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let doctor = doctor_in(temp_dir.path());
        assert_eq!(doctor.check_red_flags().status, HealthStatus::Pass);
    }

    #[test]
    fn test_report_path_check_passes_in_writable_dir() {
        let temp_dir = TempDir::new().unwrap();
        let doctor = doctor_in(temp_dir.path());
        assert_eq!(doctor.check_report_path().status, HealthStatus::Pass);
    }

    #[test]
    fn test_report_path_check_fails_on_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let doctor = Doctor::new(
            KnowledgeBase::builtin(),
            temp_dir.path().join("no_such_dir").join("report.txt"),
        );
        assert!(matches!(
            doctor.check_report_path().status,
            HealthStatus::Fail(_)
        ));
    }

    #[test]
    fn test_overall_status_pass_with_warnings() {
        let checks = vec![
            HealthCheck {
                name: "Test 1".to_string(),
                status: HealthStatus::Pass,
            },
            HealthCheck {
                name: "Test 2".to_string(),
                status: HealthStatus::Warn("warning".to_string()),
            },
        ];
        assert!(Doctor::overall_status(&checks));
    }

    #[test]
    fn test_overall_status_fail() {
        let checks = vec![
            HealthCheck {
                name: "Test 1".to_string(),
                status: HealthStatus::Pass,
            },
            HealthCheck {
                name: "Test 2".to_string(),
                status: HealthStatus::Fail("error".to_string()),
            },
        ];
        assert!(!Doctor::overall_status(&checks));
    }

    #[test]
    fn test_run_diagnostics_covers_all_checks() {
        let temp_dir = TempDir::new().unwrap();
        let doctor = doctor_in(temp_dir.path());
        let checks = doctor.run_diagnostics();
        assert_eq!(checks.len(), 6);
    }
}
