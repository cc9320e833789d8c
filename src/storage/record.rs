//! 存储记录
//!
//! `Record` 是存储层与业务层之间交换的行值，每个变体对应一张表。

use std::fmt;

use uuid::Uuid;

use crate::models::{
    course_modules::entities::CourseModule,
    courses::entities::Course,
    enrollments::entities::Enrollment,
    evaluations::entities::Evaluation,
    notifications::entities::{Notification, NotificationRecipient},
    resources::entities::Resource,
    submissions::entities::Submission,
    users::entities::User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Course,
    CourseModule,
    Resource,
    Enrollment,
    Evaluation,
    Submission,
    Notification,
    NotificationRecipient,
}

impl EntityKind {
    /// 面向调用方的实体名称，用于错误消息
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Course => "Course",
            EntityKind::CourseModule => "Module",
            EntityKind::Resource => "Resource",
            EntityKind::Enrollment => "Enrollment",
            EntityKind::Evaluation => "Evaluation",
            EntityKind::Submission => "Submission",
            EntityKind::Notification => "Notification",
            EntityKind::NotificationRecipient => "Recipient",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Course => "courses",
            EntityKind::CourseModule => "course_modules",
            EntityKind::Resource => "resources",
            EntityKind::Enrollment => "enrollments",
            EntityKind::Evaluation => "evaluations",
            EntityKind::Submission => "submissions",
            EntityKind::Notification => "notifications",
            EntityKind::NotificationRecipient => "notification_recipients",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    User(User),
    Course(Course),
    CourseModule(CourseModule),
    Resource(Resource),
    Enrollment(Enrollment),
    Evaluation(Evaluation),
    Submission(Submission),
    Notification(Notification),
    NotificationRecipient(NotificationRecipient),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::User(_) => EntityKind::User,
            Record::Course(_) => EntityKind::Course,
            Record::CourseModule(_) => EntityKind::CourseModule,
            Record::Resource(_) => EntityKind::Resource,
            Record::Enrollment(_) => EntityKind::Enrollment,
            Record::Evaluation(_) => EntityKind::Evaluation,
            Record::Submission(_) => EntityKind::Submission,
            Record::Notification(_) => EntityKind::Notification,
            Record::NotificationRecipient(_) => EntityKind::NotificationRecipient,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Record::User(e) => e.id,
            Record::Course(e) => e.id,
            Record::CourseModule(e) => e.id,
            Record::Resource(e) => e.id,
            Record::Enrollment(e) => e.id,
            Record::Evaluation(e) => e.id,
            Record::Submission(e) => e.id,
            Record::Notification(e) => e.id,
            Record::NotificationRecipient(e) => e.id,
        }
    }
}
