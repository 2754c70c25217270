/// вариант не подходит, если выполнено хотя бы одно из условий
#[macro_export]
macro_rules! blocking_checks {
    ($($expr: expr),+) => {
        if $($expr ||)+ false {
            return None;
        }
    };
}
