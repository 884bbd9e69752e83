mod class_schedule_test;
mod middleware_test;
mod teacher_test;
