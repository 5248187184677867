use serde::Deserialize;

use crate::fragment::Fragment;
use crate::quote::quoted;

pub const PPP_SECRET_PATH: &str = "/ppp secret";

/// A username/password pair for a tunnel service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One PPP secret per credential, bound to `service` and `profile`.
///
/// Passwords and the comment are written as escaped quoted strings.
pub fn ppp_secret_fragment(
    credentials: &[Credential],
    service: &str,
    profile: &str,
    comment: &str,
) -> Fragment {
    if credentials.is_empty() {
        return Fragment::new();
    }
    Fragment::single(
        PPP_SECRET_PATH,
        credentials.iter().map(|user| {
            format!(
                "add name={} password={} service={service} profile={profile} comment={}",
                user.username,
                quoted(&user.password),
                quoted(comment)
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::{ppp_secret_fragment, Credential};
    use crate::path::MenuPath;

    #[test]
    fn one_secret_per_user_in_order() {
        let users = vec![Credential::new("alice", "s3cret"), Credential::new("bob", "p w")];
        let fragment = ppp_secret_fragment(&users, "l2tp", "l2tp-profile", "L2TP");
        assert_eq!(
            fragment.get(&MenuPath::menu("/ppp secret")),
            Some(
                &[
                    r#"add name=alice password="s3cret" service=l2tp profile=l2tp-profile comment="L2TP""#
                        .to_string(),
                    r#"add name=bob password="p w" service=l2tp profile=l2tp-profile comment="L2TP""#
                        .to_string(),
                ][..]
            )
        );
    }

    #[test]
    fn password_specials_are_escaped() {
        let users = [Credential::new("alice", r#"pa"ss$word\1"#)];
        let fragment = ppp_secret_fragment(&users, "pptp", "pptp-profile", r#"say "hi""#);
        assert_eq!(
            fragment.get(&MenuPath::menu("/ppp secret")),
            Some(
                &[r#"add name=alice password="pa\"ss\$word\\1" service=pptp profile=pptp-profile comment="say \"hi\"""#
                    .to_string()][..]
            )
        );
    }

    #[test]
    fn no_users_no_section() {
        assert!(ppp_secret_fragment(&[], "pptp", "pptp-profile", "").is_empty());
    }
}
