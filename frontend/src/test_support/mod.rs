#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ActiveSession, AttendanceRecord, OverallStats, StudentSummary};
    use serde_json::{json, Value};

    pub fn session_json(date: &str) -> Value {
        json!({
            "id": 1,
            "session_date": date,
            "start_time": "08:25",
            "end_time": "09:05",
            "is_active": true,
            "created_at": format!("{date}T05:00:00")
        })
    }

    pub fn active_session(date: &str) -> ActiveSession {
        serde_json::from_value(session_json(date)).expect("session fixture")
    }

    pub fn attendance_json(id: i64, name: &str, timestamp: &str) -> Value {
        json!({
            "id": id,
            "student_id": id,
            "session_id": 1,
            "ip_address": "127.0.0.1",
            "user_agent": "test",
            "timestamp": timestamp,
            "student": {
                "id": id,
                "student_number": "",
                "name": name,
                "email": ""
            }
        })
    }

    pub fn attendance_record(id: i64, name: &str, timestamp: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: Some(id),
            student: Some(StudentSummary {
                id: Some(id),
                name: name.into(),
                student_number: None,
            }),
            timestamp: Some(timestamp.into()),
        }
    }

    pub fn daily_list_json(date: &str, records: Vec<Value>) -> Value {
        let total = records.len();
        json!({
            "session": session_json(date),
            "attendances": records,
            "total_count": total
        })
    }

    pub fn stats_json(students: u64, sessions: u64) -> Value {
        json!({
            "total_students": students,
            "total_sessions": sessions,
            "total_attendances": students * sessions / 2,
            "average_attendance_rate": 50.0
        })
    }

    pub fn stats(students: u64, sessions: u64) -> OverallStats {
        serde_json::from_value(stats_json(students, sessions)).expect("stats fixture")
    }
}
