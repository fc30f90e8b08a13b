mod get_audit_logs;

pub use get_audit_logs::GetAuditLogsUseCase;
