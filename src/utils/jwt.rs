use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // 身份账号 id
    pub role: String, // 用户角色
    pub exp: usize,   // 过期时间戳
    pub iat: usize,   // 签发时间
}

pub struct JwtUtils;

impl JwtUtils {
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    /// 有效期（秒）
    pub fn access_token_ttl() -> i64 {
        AppConfig::get().jwt.access_token_expiry * 60
    }

    // 生成 Access Token
    pub fn generate_access_token(
        account_id: &str,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::sign(
            account_id,
            role,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
            &config.jwt.secret,
        )
    }

    /// 用指定密钥签发
    pub fn sign(
        account_id: &str,
        role: &str,
        expiry_duration: chrono::Duration,
        secret: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: account_id.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_with_secret(token, &Self::get_secret())
    }

    pub fn verify_with_secret(
        token: &str,
        secret: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        decode::<Claims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let token =
            JwtUtils::sign("user_abc", "teacher", chrono::Duration::minutes(5), "secret").unwrap();
        let claims = JwtUtils::verify_with_secret(&token, "secret").unwrap();
        assert_eq!(claims.sub, "user_abc");
        assert_eq!(claims.role, "teacher");
        assert!(JwtUtils::verify_with_secret(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token =
            JwtUtils::sign("user_abc", "admin", chrono::Duration::minutes(-10), "secret").unwrap();
        assert!(JwtUtils::verify_with_secret(&token, "secret").is_err());
    }
}
